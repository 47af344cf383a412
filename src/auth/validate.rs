/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an already-normalized slug: 1-100 chars of `a-z`, `0-9` and `-`.
pub fn validate_slug(slug: &str) -> Option<String> {
    if slug.is_empty() {
        return Some("Slug must contain at least one letter or digit".to_string());
    }
    if slug.len() > 100 {
        return Some("Slug must be at most 100 characters".to_string());
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Some("Slug may only contain lowercase letters, digits and hyphens".to_string());
    }
    None
}

/// Validate a URL entered by an editor. Only absolute http(s) URLs and
/// site-relative paths are accepted, which keeps `javascript:` and friends
/// out of rendered `href`/`src` attributes.
pub fn validate_url(value: &str, field_name: &str, required: bool) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return required.then(|| format!("{field_name} is required"));
    }
    if trimmed.len() > 2048 {
        return Some(format!("{field_name} must be at most 2048 characters"));
    }
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));
    if !allowed || trimmed.chars().any(char::is_whitespace) {
        return Some(format!("{field_name} must be an http(s) URL or a path starting with '/'"));
    }
    None
}

/// Parse an integer form field. Blank yields `default`.
pub fn parse_integer(value: &str, field_name: &str, default: Option<i64>) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default.ok_or_else(|| format!("{field_name} is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("{field_name} must be a whole number"))
}
