//! Weekday names used in schedule `days` lists.

use chrono::Weekday;

use super::DomainError;

/// Parse a weekday name.
///
/// Accepts full ("Monday") or three-letter ("Mon") English names,
/// case-insensitively. Surrounding whitespace is not allowed.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use schedule_server::domain::parse_weekday;
///
/// assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
/// assert_eq!(parse_weekday("sat").unwrap(), Weekday::Sat);
/// assert!(parse_weekday("Funday").is_err());
/// ```
pub fn parse_weekday(s: &str) -> Result<Weekday, DomainError> {
    s.parse::<Weekday>()
        .map_err(|_| DomainError::UnknownWeekday(s.to_string()))
}
