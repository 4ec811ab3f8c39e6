use leetmetric_types::{InputError, Username};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,25}$").expect("valid username regex"));

/// Validate raw input and return the trimmed, case-preserved username.
///
/// Trimming strips Unicode whitespace plus U+FEFF, which pasted text often
/// carries as a leading byte-order mark.
pub fn validate_username(raw: &str) -> Result<Username, InputError> {
    let trimmed = raw.trim_matches(is_trimmable);
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }

    if !USERNAME_PATTERN.is_match(trimmed) {
        return Err(InputError::InvalidFormat);
    }

    Ok(Username::new(trimmed))
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
