//! Request extractors with `{ "msg": ... }` rejections

use axum::extract::FromRequest;

use crate::utils::{AppError, AppResult};

/// `axum::Json` whose rejection is a 400 [`AppError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse a numeric `{id}` path segment
pub fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid id '{raw}'.")))
}

/// First `key=value` pair of a query string, if any
pub fn first_filter(pairs: &[(String, String)]) -> Option<(&str, &str)> {
    pairs.first().map(|(k, v)| (k.as_str(), v.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("x").unwrap_err().message, "Invalid id 'x'.");
    }

    #[test]
    fn test_first_filter_ignores_the_rest() {
        let pairs = vec![
            ("surname".to_string(), "Lovelace".to_string()),
            ("addrCity".to_string(), "Toronto".to_string()),
        ];
        assert_eq!(first_filter(&pairs), Some(("surname", "Lovelace")));
        assert_eq!(first_filter(&[]), None);
    }
}
