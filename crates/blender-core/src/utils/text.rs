//! Text helpers shared by rules.

/// Returns the value if it is present and not empty.
///
/// The builder writes every form field, so an empty string means "not set".
/// Whitespace-only values count as set, as they do in the builder's form checks.
#[must_use]
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Case-insensitive equality, as used for driver names and Windows paths.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Value of the leading decimal digits of `text`, after leading whitespace
/// and an optional sign, the way the builder reads ids and version parts
/// (`"12abc"` is 12). Negative or digit-less text is 0; values past
/// `u64::MAX` saturate.
#[must_use]
pub fn leading_integer(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits == 0 {
        return 0;
    }
    rest[..digits].parse().unwrap_or(u64::MAX)
}
