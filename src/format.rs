//! Text Formatting Helpers

/// Suffix for a counted word: `singular` when `count == 1`, `plural` otherwise.
///
/// `format!("{} cit{}", n, pluralize(n, "y", "ies"))` gives "1 city", "2 cities".
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "", "s"), "");
        assert_eq!(pluralize(0, "", "s"), "s");
        assert_eq!(pluralize(10, "", "s"), "s");
        assert_eq!(pluralize(1, "y", "ies"), "y");
        assert_eq!(pluralize(2, "y", "ies"), "ies");
    }
}
