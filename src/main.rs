//! Pilosus Admin UI Entry Point

fn main() {
    console_error_panic_hook::set_once();
    pilosus_admin_ui::start();
}
