//! Input validation shared by record constructors and services.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    EmptyField(&'static str),
    /// A date field is neither blank nor `YYYY-MM-DD`.
    InvalidDate { field: &'static str, value: String },
    InvalidEmail(String),
    /// An enumerated field holds an unknown value.
    UnknownValue { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` is required"),
            Self::InvalidDate { field, value } => {
                write!(f, "`{field}` must be YYYY-MM-DD, got `{value}`")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::UnknownValue { field, value } => {
                write!(f, "unknown {field} `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Parses a strict `YYYY-MM-DD` date; anything else yields `None`.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Accepts a blank value or a valid ISO date.
pub fn optional_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_iso_date(value).is_some() {
        return Ok(());
    }
    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value.trim()) {
        return Ok(());
    }
    Err(ValidationError::InvalidEmail(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{email, optional_date, parse_iso_date, require_text, ValidationError};

    #[test]
    fn iso_dates_must_be_real_calendar_days() {
        assert!(parse_iso_date("2024-02-29").is_some());
        assert!(parse_iso_date("2023-02-29").is_none());
        assert!(parse_iso_date("2024-2-1").is_none());
        assert!(parse_iso_date("next week").is_none());
    }

    #[test]
    fn optional_date_allows_blank() {
        assert!(optional_date("dueDate", "").is_ok());
        assert!(matches!(
            optional_date("dueDate", "15/02/2024"),
            Err(ValidationError::InvalidDate { field: "dueDate", .. })
        ));
    }

    #[test]
    fn required_text_and_email() {
        assert_eq!(
            require_text("title", "   "),
            Err(ValidationError::EmptyField("title"))
        );
        assert!(email("editor@example.com").is_ok());
        assert!(email("editor@").is_err());
    }
}
