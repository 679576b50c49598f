use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]-[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern"))
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("time pattern"))
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose `local@domain.tld` shape check, not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Exactly `D-DDD-DDD-DDDD`.
pub fn is_valid_phone(value: &str) -> bool {
    phone_pattern().is_match(value)
}

/// Length is counted in characters, not bytes.
pub fn is_within_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Parses a trimmed decimal, rejecting `NaN` and infinities.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Minutes since midnight for a 24h `HH:MM` value.
pub fn parse_time_to_minutes(value: &str) -> Option<u32> {
    let captures = time_pattern().captures(value)?;
    let hours: u32 = captures[1].parse().ok()?;
    let minutes: u32 = captures[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_domain_and_tld() {
        assert!(is_valid_email("jane@co.com"));
        assert!(is_valid_email("jane.doe+hr@mail.example.org"));
        assert!(!is_valid_email("jane@co"));
        assert!(!is_valid_email("jane co@co.com"));
        assert!(!is_valid_email("@co.com"));
        assert!(!is_valid_email("jane@@co.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_must_match_grouped_layout() {
        assert!(is_valid_phone("1-555-123-4567"));
        assert!(!is_valid_phone("1-555-123-456"));
        assert!(!is_valid_phone("15551234567"));
        assert!(!is_valid_phone("+1-555-123-4567"));
        assert!(!is_valid_phone(" 1-555-123-4567"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(is_within_length("ééé", 3));
        assert!(!is_within_length("éééé", 3));
        assert_eq!(truncate_chars("ééééé", 2), "éé");
    }

    #[test]
    fn number_parsing_rejects_non_finite_values() {
        assert_eq!(parse_number(" 42.5 "), Some(42.5));
        assert_eq!(parse_number("-1"), Some(-1.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn range_is_inclusive() {
        assert!(is_in_range(50.0, 50.0, 150.0));
        assert!(is_in_range(150.0, 50.0, 150.0));
        assert!(!is_in_range(150.5, 50.0, 150.0));
    }

    #[test]
    fn time_parsing_accepts_24h_values_only() {
        assert_eq!(parse_time_to_minutes("00:00"), Some(0));
        assert_eq!(parse_time_to_minutes("09:30"), Some(570));
        assert_eq!(parse_time_to_minutes("23:59"), Some(1439));
        assert_eq!(parse_time_to_minutes("24:00"), None);
        assert_eq!(parse_time_to_minutes("9:30"), None);
        assert_eq!(parse_time_to_minutes("12:60"), None);
    }
}
