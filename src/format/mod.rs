//! Formatting and text utilities shared by the section builders and the
//! derived-content builders.

use crate::tables::COUNTRIES;

/// Formats a phone number to US standard (`+1XXXXXXXXXX`).
///
/// Normalization is best-effort, not validating: exactly three shapes are
/// recognized, and anything else is returned unchanged.
#[must_use]
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    // Already formatted with +1
    if raw.starts_with("+1") && digits.len() == 11 {
        return raw.to_string();
    }
    // 10 digits - add +1 prefix
    if digits.len() == 10 {
        return format!("+1{digits}");
    }
    // 11 digits starting with 1 - add + prefix
    if digits.len() == 11 && digits.starts_with('1') {
        return format!("+{digits}");
    }
    raw.to_string()
}

/// A full name split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitName {
    /// First name, if the input had at least two tokens
    pub first_name: Option<String>,
    /// Everything between the first and last tokens
    pub middle_name: Option<String>,
    /// Last name; the sole token of a one-token input
    pub last_name: Option<String>,
}

/// Splits a free-text full name on whitespace.
///
/// One token is a last name only; two tokens are first and last; three or
/// more keep the first and last tokens and join the rest as the middle name.
#[must_use]
pub fn split_full_name(full_name: &str) -> SplitName {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => SplitName::default(),
        [last] => SplitName {
            last_name: Some((*last).to_string()),
            ..SplitName::default()
        },
        [first, last] => SplitName {
            first_name: Some((*first).to_string()),
            middle_name: None,
            last_name: Some((*last).to_string()),
        },
        [first, middle @ .., last] => SplitName {
            first_name: Some((*first).to_string()),
            middle_name: Some(middle.join(" ")),
            last_name: Some((*last).to_string()),
        },
    }
}

/// Resolves a country code or country name to the normalized country name.
///
/// Tries the code table first; otherwise accepts an input that already is a
/// recognized name (case-insensitive) and returns it with its original
/// casing. Anything else is `None`.
#[must_use]
pub fn resolve_country(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(name) = COUNTRIES.get(input) {
        return Some(name.to_string());
    }
    let lower = input.to_lowercase();
    if COUNTRIES.values().any(|name| name.to_lowercase() == lower) {
        return Some(input.to_string());
    }
    None
}

/// Normalizes `\r\n` and bare `\r` line endings to `\n`.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Removes lines consisting solely of `=` characters and trims the result.
///
/// Such lines are divider artifacts from the intake tool's note convention
/// and must not reach the rendered output.
#[must_use]
pub fn strip_divider_lines(text: &str) -> String {
    normalize_newlines(text)
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || !trimmed.chars().all(|c| c == '=')
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Extracts the Yes/No following a `Used trademark in commerce:` marker in
/// free note text, case-insensitively.
#[must_use]
pub fn parse_used_in_commerce(note: &str) -> Option<&'static str> {
    const MARKER: &str = "used trademark in commerce:";
    let lower = note.to_lowercase();
    let start = lower.find(MARKER)? + MARKER.len();
    let rest = lower[start..].trim_start();
    if rest.starts_with("yes") {
        Some("Yes")
    } else if rest.starts_with("no") {
        Some("No")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_ten_digits_gets_country_code() {
        assert_eq!(format_phone_number("555-123-4567"), "+15551234567");
        assert_eq!(format_phone_number("(555) 123 4567"), "+15551234567");
    }

    #[test]
    fn test_phone_eleven_digits_gets_plus() {
        assert_eq!(format_phone_number("15551234567"), "+15551234567");
        assert_eq!(format_phone_number("1-555-123-4567"), "+15551234567");
    }

    #[test]
    fn test_phone_already_formatted_passes_through() {
        assert_eq!(format_phone_number("+15551234567"), "+15551234567");
    }

    #[test]
    fn test_phone_other_shapes_unchanged() {
        assert_eq!(format_phone_number("123"), "123");
        assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
    }

    #[test]
    fn test_split_single_token_is_last_name() {
        let name = split_full_name("Doe");
        assert_eq!(name.first_name, None);
        assert_eq!(name.middle_name, None);
        assert_eq!(name.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_split_two_tokens() {
        let name = split_full_name("Jane Doe");
        assert_eq!(name.first_name.as_deref(), Some("Jane"));
        assert_eq!(name.middle_name, None);
        assert_eq!(name.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_split_joins_middle_tokens() {
        let name = split_full_name("Jane Q Public Doe");
        assert_eq!(name.first_name.as_deref(), Some("Jane"));
        assert_eq!(name.middle_name.as_deref(), Some("Q Public"));
        assert_eq!(name.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_full_name("   "), SplitName::default());
    }

    #[test]
    fn test_resolve_country_from_code() {
        assert_eq!(resolve_country("US").as_deref(), Some("United States"));
        assert_eq!(resolve_country("jp").as_deref(), Some("Japan"));
    }

    #[test]
    fn test_resolve_country_keeps_name_casing() {
        assert_eq!(resolve_country("united states").as_deref(), Some("united states"));
        assert_eq!(resolve_country("GERMANY").as_deref(), Some("GERMANY"));
    }

    #[test]
    fn test_resolve_country_unrecognized_is_none() {
        assert_eq!(resolve_country("Atlantis"), None);
        assert_eq!(resolve_country(""), None);
    }

    #[test]
    fn test_strip_divider_lines() {
        assert_eq!(
            strip_divider_lines("Line1\n==========\nLine2"),
            "Line1\nLine2"
        );
        assert_eq!(strip_divider_lines("====\r\ntext\r===="), "text");
        assert_eq!(strip_divider_lines("a = b\n==\n"), "a = b");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_parse_used_in_commerce() {
        assert_eq!(
            parse_used_in_commerce("Notes...\nUsed trademark in commerce: Yes\nMore"),
            Some("Yes")
        );
        assert_eq!(
            parse_used_in_commerce("USED TRADEMARK IN COMMERCE:   no"),
            Some("No")
        );
        assert_eq!(parse_used_in_commerce("Used trademark in commerce: maybe"), None);
        assert_eq!(parse_used_in_commerce("nothing relevant"), None);
    }
}
