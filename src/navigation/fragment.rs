//! URL fragment addressing for slider positions.
//!
//! A fragment is `#` + prefix + 1-based position, with no separator between
//! the prefix and the number (`#truth3`, `#homepage-12`).

/// Format the fragment (including the leading `#`) for a 1-based position.
pub fn format(prefix: &str, position: usize) -> String {
    format!("#{prefix}{position}")
}

/// Parse the position out of a fragment.
///
/// Accepts the fragment with or without its leading `#`. Returns `None` when
/// the fragment is empty, carries a different prefix, or the remainder is not
/// a plain integer. Zero and out-of-range values are returned as parsed; use
/// [`resolve_position`] to clamp them.
pub fn parse_position(fragment: &str, prefix: &str) -> Option<usize> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let digits = raw.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Resolve a fragment to a position in `[1, len]`.
///
/// Missing or malformed fragments resolve to 1. Out-of-range values are
/// clamped rather than handed to the widgets unchecked.
pub fn resolve_position(fragment: Option<&str>, prefix: &str, len: usize) -> usize {
    let parsed = fragment.and_then(|f| parse_position(f, prefix)).unwrap_or(1);
    clamp_position(parsed, len)
}

/// Clamp a position into `[1, len]`. An empty slider still reports position 1.
pub fn clamp_position(position: usize, len: usize) -> usize {
    position.clamp(1, len.max(1))
}

/// Whether a fragment is addressed to the slider using `prefix`. An empty
/// fragment (`""` or `"#"`) belongs to everyone; a fragment that starts with
/// this prefix belongs to this slider even when its number is malformed.
pub fn belongs_to(fragment: &str, prefix: &str) -> bool {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    raw.is_empty() || raw.starts_with(prefix)
}

/// Build the fragment prefix for an embedded slider. The slug namespaces the
/// fragment so several sliders can share one page.
pub fn prefix_for_slug(slug: &str) -> String {
    format!("{slug}-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_has_no_separator() {
        assert_eq!(format("truth", 3), "#truth3");
        assert_eq!(format("home-", 12), "#home-12");
    }

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!(parse_position("#truth3", "truth"), Some(3));
        assert_eq!(parse_position("truth3", "truth"), Some(3));
        assert_eq!(parse_position("#truth42", "truth"), Some(42));
    }

    #[test]
    fn parse_rejects_foreign_and_malformed() {
        assert_eq!(parse_position("", "truth"), None);
        assert_eq!(parse_position("#", "truth"), None);
        assert_eq!(parse_position("#truth", "truth"), None);
        assert_eq!(parse_position("#other3", "truth"), None);
        assert_eq!(parse_position("#truthx", "truth"), None);
        assert_eq!(parse_position("#truth3a", "truth"), None);
        assert_eq!(parse_position("#truth-3", "truth"), None);
    }

    #[test]
    fn parse_passes_out_of_range_through() {
        assert_eq!(parse_position("#truth0", "truth"), Some(0));
        assert_eq!(parse_position("#truth99", "truth"), Some(99));
    }

    #[test]
    fn resolve_defaults_and_clamps() {
        assert_eq!(resolve_position(None, "truth", 5), 1);
        assert_eq!(resolve_position(Some("#junk"), "truth", 5), 1);
        assert_eq!(resolve_position(Some("#truth4"), "truth", 5), 4);
        assert_eq!(resolve_position(Some("#truth0"), "truth", 5), 1);
        assert_eq!(resolve_position(Some("#truth9"), "truth", 5), 5);
    }

    #[test]
    fn ownership_is_decided_by_prefix() {
        assert!(belongs_to("#truth3", "truth"));
        assert!(belongs_to("#truthx", "truth"));
        assert!(belongs_to("#", "truth"));
        assert!(belongs_to("", "truth"));
        assert!(!belongs_to("#other-3", "truth"));
        assert!(!belongs_to("#hero-3", "other-"));
    }

    #[test]
    fn slug_prefix_round_trips() {
        let prefix = prefix_for_slug("homepage");
        assert_eq!(parse_position(&format(&prefix, 7), &prefix), Some(7));
    }
}
