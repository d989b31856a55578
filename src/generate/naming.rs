//! Name mapping shared by the generators.
//!
//! Source names are camelCase path segments like `button/accentDark`.
//! Each target has its own casing rules, all derived from the same
//! word-splitting pass.

/// Insert `separator` before every uppercase letter that follows a
/// lowercase letter or digit: `textPrimary` becomes `text Primary`.
pub fn split_words(name: &str, separator: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_splittable = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_splittable {
            out.push_str(separator);
        }
        prev_splittable = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c);
    }

    out
}

/// Android resource identifier form: word-split with `_`, path separators
/// flattened to `_`, all lowercase.
pub fn snake_case(name: &str) -> String {
    split_words(name, "_").replace('/', "_").to_lowercase()
}

/// Human-readable form used in the HTML preview and catalog paths.
pub fn display_name(name: &str) -> String {
    split_words(name, " ")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("textPrimary", " "), "text Primary");
        assert_eq!(split_words("item2Dark", " "), "item2 Dark");
        assert_eq!(split_words("ABC", " "), "ABC");
        assert_eq!(split_words("already split", " "), "already split");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("textPrimary"), "text_primary");
        assert_eq!(snake_case("button/accentDark"), "button_accent_dark");
        assert_eq!(snake_case("plain"), "plain");
    }

    #[test]
    fn test_display_name_keeps_slashes() {
        assert_eq!(display_name("button/accentDark"), "button/accent Dark");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("accent"), "Accent");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
    }
}
