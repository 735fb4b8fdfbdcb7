//! Markdown Preview
//!
//! Renders the body field for the live preview next to it.
//! Raw HTML is shown as text and only safe link schemes survive, so the
//! preview cannot run script from the text being edited.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Link schemes allowed through; everything else becomes `#`
const SAFE_SCHEMES: &[&str] = &["http:", "https:", "ftp:", "mailto:"];

/// Render markdown to HTML for the preview pane
pub fn render_preview(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser.map(sanitize_event));
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        // Shown verbatim, escaped by the HTML writer
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative URLs and whitelisted schemes
fn is_safe_url(url: &str) -> bool {
    let lower: String = url.trim().chars().filter(|c| !c.is_control()).collect::<String>().to_lowercase();
    match lower.find(':') {
        // A colon after the first path, query or fragment separator is not a scheme
        Some(pos) if !lower[..pos].contains(['/', '?', '#']) => {
            SAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_preview("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_preview("<script>alert(1)</script>\n\ntext with <b>inline</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_unsafe_links_neutralized() {
        let html = render_preview("[x](javascript:alert(1)) [y](https://example.com) [z](/local/path)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="/local/path""#));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("MAILTO:me@example.com"));
        assert!(is_safe_url("relative/page?a=b:c"));
        assert!(is_safe_url("#anchor"));
        assert!(!is_safe_url("javascript:void(0)"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_preview(""), "");
    }
}
