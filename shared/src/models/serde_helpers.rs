//! Lenient deserializers for form-style JSON
//!
//! The UI posts numeric ids and dates either as JSON numbers or as strings
//! (`"empID": "3"`, `"hireDate": "2024-05-01"`). These helpers coerce both
//! shapes into typed values before any validation runs.

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Parse `YYYY-MM-DD`, also accepting a full ISO timestamp (date part kept)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = match trimmed.char_indices().nth(10) {
        Some((idx, 'T')) | Some((idx, ' ')) => &trimmed[..idx],
        _ => trimmed,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Scalar accepted where an integer is expected
#[derive(Debug, Clone, Copy)]
struct FlexibleInt(Option<i64>);

impl<'de> Deserialize<'de> for FlexibleInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FlexibleInt(Some(value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                i64::try_from(value)
                    .map(|v| FlexibleInt(Some(v)))
                    .map_err(|_| E::custom(format!("integer out of range: {}", value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                if value.fract() == 0.0 && value.is_finite() {
                    Ok(FlexibleInt(Some(value as i64)))
                } else {
                    Err(E::custom(format!("expected an integer, got {}", value)))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(FlexibleInt(None));
                }
                trimmed
                    .parse::<i64>()
                    .map(|v| FlexibleInt(Some(v)))
                    .map_err(|_| E::custom(format!("invalid integer: {}", value)))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FlexibleInt(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FlexibleInt(None))
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Required integer, number or numeric string
pub mod int {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexibleInt::deserialize(d)?
            .0
            .ok_or_else(|| de::Error::custom("expected an integer, got an empty value"))
    }
}

/// Optional integer; `null` and `""` both map to `None`
pub mod option_int {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexibleInt::deserialize(d).map(|f| f.0)
    }
}

/// Number or numeric string, as f64
pub mod float {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Text(String),
        }

        match Raw::deserialize(d)? {
            Raw::Num(v) => Ok(v),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid number: {}", s))),
        }
    }
}

/// Required `YYYY-MM-DD` date
pub mod date {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// Optional `YYYY-MM-DD` date; `null` and `""` both map to `None`
pub mod option_date {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw))),
        }
    }
}

/// Any scalar rendered as a string (`20250125` becomes `"20250125"`)
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(d)? {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }
}

/// Deserialize bool that treats null as false
pub fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(with = "int")]
        id: i64,
        #[serde(default, with = "option_int")]
        manager: Option<i64>,
        #[serde(default, with = "option_date")]
        hired: Option<NaiveDate>,
        #[serde(default, deserialize_with = "bool_false")]
        flag: bool,
    }

    #[test]
    fn test_int_accepts_number_and_string() {
        let p: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(p.id, 7);
        let p: Probe = serde_json::from_str(r#"{"id": " 12 "}"#).unwrap();
        assert_eq!(p.id, 12);
    }

    #[test]
    fn test_int_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": ""}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1.5}"#).is_err());
    }

    #[test]
    fn test_optional_fields() {
        let p: Probe =
            serde_json::from_str(r#"{"id": 1, "manager": "", "hired": null, "flag": null}"#)
                .unwrap();
        assert_eq!(p.manager, None);
        assert_eq!(p.hired, None);
        assert!(!p.flag);

        let p: Probe =
            serde_json::from_str(r#"{"id": 1, "manager": "4", "hired": "2024-05-01"}"#).unwrap();
        assert_eq!(p.manager, Some(4));
        assert_eq!(p.hired, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        assert_eq!(
            parse_date("2025-01-25T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 1, 25)
        );
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("25/01/2025"), None);
    }
}
