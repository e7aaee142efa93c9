//! Input validation helpers
//!
//! Centralized text length constants and the static pattern checks for
//! employee records.

use crate::utils::AppError;
use regex::Regex;
use std::sync::LazyLock;

// ── Text length limits ──────────────────────────────────────────────

/// Given name, surname
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: SIN, postal code, province
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Street and city
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Patterns ────────────────────────────────────────────────────────

/// Alphanumeric first and last character, with `@letters.` somewhere after
/// the first character
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9].*@[a-z]+\..*[a-z0-9]$").unwrap_or_else(|_| unreachable!())
});

/// Canadian postal code, `A1A 1A1` with optional space
static POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJKLMNPRSTVXY]\s?\d[ABCEGHJKLMNPRSTVXY]\d$")
        .unwrap_or_else(|_| unreachable!())
});

/// Provinces and territories, as codes or full names
pub const PROVINCES: [&str; 26] = [
    "AB",
    "BC",
    "MB",
    "NB",
    "NL",
    "NS",
    "NT",
    "NU",
    "ON",
    "PE",
    "QC",
    "SK",
    "YT",
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Nova Scotia",
    "Northwest Territories",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty.")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len}).",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len}).",
            v.len()
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(AppError::validation(format!(
            "Email '{}' is not a valid email address.",
            email.trim()
        )));
    }
    Ok(())
}

/// Absent or blank postal codes are accepted
pub fn validate_postal_code(postal: Option<&str>) -> Result<(), AppError> {
    match postal.map(str::trim) {
        Some(p) if !p.is_empty() && !POSTAL_RE.is_match(p) => Err(AppError::validation(
            format!("Postal code '{p}' is not a valid Canadian postal code."),
        )),
        _ => Ok(()),
    }
}

/// Exact match against [`PROVINCES`]; absent or blank is accepted
pub fn validate_province(province: Option<&str>) -> Result<(), AppError> {
    match province.map(str::trim) {
        Some(p) if !p.is_empty() && !PROVINCES.contains(&p) => Err(AppError::validation(
            format!("Province '{p}' is not a Canadian province or territory."),
        )),
        _ => Ok(()),
    }
}

/// City names must contain at least one letter; absent or blank is accepted
pub fn validate_city(city: Option<&str>) -> Result<(), AppError> {
    match city.map(str::trim) {
        Some(c) if !c.is_empty() && !c.chars().any(|ch| ch.is_ascii_alphabetic()) => Err(
            AppError::validation(format!("City '{c}' must contain letters.")),
        ),
        _ => Ok(()),
    }
}

pub fn validate_pay_rate(pay_rate: f64) -> Result<(), AppError> {
    if !pay_rate.is_finite() || pay_rate < 0.0 {
        return Err(AppError::validation(format!(
            "Pay rate must be a non-negative number, got {pay_rate}."
        )));
    }
    Ok(())
}
