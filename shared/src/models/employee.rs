//! Employee Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employee record
///
/// `emp_manager_id` is a plain attribute: it may point at an employee that
/// never existed or has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "employeeID")]
    pub employee_id: i64,
    pub given_name: String,
    pub surname: String,
    pub email: String,
    /// Argon2 PHC string, never sent to clients
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(rename = "SIN")]
    pub sin: Option<String>,
    pub addr_street: Option<String>,
    pub addr_city: Option<String>,
    pub addr_prov: Option<String>,
    pub addr_postal: Option<String>,
    pub is_manager: bool,
    #[serde(rename = "empManagerID")]
    pub emp_manager_id: Option<i64>,
    pub status: EmployeeStatus,
    pub department: Option<i64>,
    pub hire_date: Option<NaiveDate>,
    pub pay_rate: f64,
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub given_name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "SIN", default)]
    pub sin: Option<String>,
    #[serde(default)]
    pub addr_street: Option<String>,
    #[serde(default)]
    pub addr_city: Option<String>,
    #[serde(default)]
    pub addr_prov: Option<String>,
    #[serde(default)]
    pub addr_postal: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_manager: bool,
    #[serde(
        rename = "empManagerID",
        default,
        deserialize_with = "serde_helpers::option_int::deserialize"
    )]
    pub emp_manager_id: Option<i64>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default, deserialize_with = "serde_helpers::option_int::deserialize")]
    pub department: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::option_date::deserialize")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::float::deserialize")]
    pub pay_rate: f64,
}

/// Full-record update payload
///
/// Every field is replaced. `password` may be omitted or empty to keep the
/// stored hash.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(rename = "employeeID", deserialize_with = "serde_helpers::int::deserialize")]
    pub employee_id: i64,
    pub given_name: String,
    pub surname: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "SIN", default)]
    pub sin: Option<String>,
    #[serde(default)]
    pub addr_street: Option<String>,
    #[serde(default)]
    pub addr_city: Option<String>,
    #[serde(default)]
    pub addr_prov: Option<String>,
    #[serde(default)]
    pub addr_postal: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_manager: bool,
    #[serde(
        rename = "empManagerID",
        default,
        deserialize_with = "serde_helpers::option_int::deserialize"
    )]
    pub emp_manager_id: Option<i64>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default, deserialize_with = "serde_helpers::option_int::deserialize")]
    pub department: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::option_date::deserialize")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::float::deserialize")]
    pub pay_rate: f64,
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
