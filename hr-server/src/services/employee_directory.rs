//! Employee Directory
//!
//! Employee CRUD with field validation, Argon2 password handling and
//! credential checks for login.

use super::parse_filter;
use crate::auth::password::{hash_password, is_password_hash, verify_password};
use crate::db::repository::{RepoError, employee};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_city,
    validate_email, validate_optional_text, validate_pay_rate, validate_postal_code,
    validate_province, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeField, EmployeeStatus, EmployeeUpdate};
use sqlx::SqlitePool;

/// Fields validated identically on add and update
struct Profile<'a> {
    given_name: &'a str,
    surname: &'a str,
    email: &'a str,
    sin: &'a Option<String>,
    addr_street: &'a Option<String>,
    addr_city: &'a Option<String>,
    addr_prov: &'a Option<String>,
    addr_postal: &'a Option<String>,
    pay_rate: f64,
}

impl<'a> From<&'a EmployeeCreate> for Profile<'a> {
    fn from(d: &'a EmployeeCreate) -> Self {
        Self {
            given_name: &d.given_name,
            surname: &d.surname,
            email: &d.email,
            sin: &d.sin,
            addr_street: &d.addr_street,
            addr_city: &d.addr_city,
            addr_prov: &d.addr_prov,
            addr_postal: &d.addr_postal,
            pay_rate: d.pay_rate,
        }
    }
}

impl<'a> From<&'a EmployeeUpdate> for Profile<'a> {
    fn from(d: &'a EmployeeUpdate) -> Self {
        Self {
            given_name: &d.given_name,
            surname: &d.surname,
            email: &d.email,
            sin: &d.sin,
            addr_street: &d.addr_street,
            addr_city: &d.addr_city,
            addr_prov: &d.addr_prov,
            addr_postal: &d.addr_postal,
            pay_rate: d.pay_rate,
        }
    }
}

impl Profile<'_> {
    fn validate(&self) -> AppResult<()> {
        validate_required_text(self.given_name, "givenName", MAX_NAME_LEN)?;
        validate_required_text(self.surname, "surname", MAX_NAME_LEN)?;
        validate_email(self.email)?;
        validate_optional_text(self.sin, "SIN", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(self.addr_street, "addrStreet", MAX_ADDRESS_LEN)?;
        validate_optional_text(self.addr_city, "addrCity", MAX_ADDRESS_LEN)?;
        validate_city(self.addr_city.as_deref())?;
        validate_province(self.addr_prov.as_deref())?;
        validate_postal_code(self.addr_postal.as_deref())?;
        validate_pay_rate(self.pay_rate)?;
        Ok(())
    }
}

fn validate_password(password: &str) -> AppResult<()> {
    validate_required_text(password, "password", MAX_PASSWORD_LEN)
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password).map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

fn email_in_use(email: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeEmailExists,
        format!("Email '{}' is already in use.", email.trim()),
    )
}

fn employee_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee #{id} not found."))
}

#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    pool: SqlitePool,
}

impl EmployeeDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate, hash the password and insert
    pub async fn add(&self, data: EmployeeCreate) -> AppResult<Employee> {
        if let Err(e) = Profile::from(&data)
            .validate()
            .and_then(|_| validate_password(&data.password))
        {
            tracing::warn!(email = %data.email, reason = %e.message, "Employee rejected");
            return Err(e);
        }

        let password_hash = hash(&data.password)?;
        let created = employee::create(&self.pool, &data, &password_hash)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => {
                    tracing::warn!(email = %data.email, "Employee rejected: email in use");
                    email_in_use(&data.email)
                }
                other => AppError::from(other),
            })?;

        tracing::info!(employee_id = created.employee_id, "Employee created");
        Ok(created)
    }

    /// Full-record replace keyed by `employeeID`
    ///
    /// The stored password hash is kept when the payload's password is
    /// absent, empty or identical to it. Any other Argon2 hash is refused
    /// so a hash is never hashed again.
    pub async fn update(&self, data: EmployeeUpdate) -> AppResult<()> {
        if let Err(e) = Profile::from(&data).validate() {
            tracing::warn!(employee_id = data.employee_id, reason = %e.message, "Employee update rejected");
            return Err(e);
        }

        let existing = employee::find_by_id(&self.pool, data.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(data.employee_id))?;

        let password_hash = match data.password.as_deref() {
            None | Some("") => existing.password.clone(),
            Some(p) if p == existing.password => existing.password.clone(),
            Some(p) if is_password_hash(p) => {
                tracing::warn!(employee_id = data.employee_id, "Employee update rejected: hashed password");
                return Err(AppError::validation(
                    "Password must be sent as plain text, not as a hash.",
                ));
            }
            Some(p) => {
                validate_password(p)?;
                hash(p)?
            }
        };

        employee::update(&self.pool, &data, &password_hash)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => email_in_use(&data.email),
                RepoError::NotFound(_) => employee_not_found(data.employee_id),
                other => AppError::from(other),
            })?;

        tracing::info!(employee_id = data.employee_id, "Employee updated");
        Ok(())
    }

    /// Update without touching `isManager`, `payRate` or `status`
    pub async fn update_own_profile(&self, mut data: EmployeeUpdate) -> AppResult<()> {
        let existing = employee::find_by_id(&self.pool, data.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(data.employee_id))?;
        data.is_manager = existing.is_manager;
        data.pay_rate = existing.pay_rate;
        data.status = Some(existing.status);
        self.update(data).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<Employee>> {
        Ok(employee::find_all(&self.pool).await?)
    }

    pub async fn get_by_field(&self, key: &str, value: &str) -> AppResult<Vec<Employee>> {
        let filter = parse_filter::<EmployeeField>(key, value)?;
        Ok(employee::find_by_field(&self.pool, &filter).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Employee> {
        employee::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
    }

    /// No cascade: attendance rows for this employee stay in place
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        employee::delete(&self.pool, id).await.map_err(|e| match e {
            RepoError::NotFound(_) => employee_not_found(id),
            other => AppError::from(other),
        })?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    /// Check credentials for login
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Employee> {
        let Some(found) = employee::find_by_email(&self.pool, email).await? else {
            return Err(AppError::invalid_credentials());
        };

        let valid = verify_password(password, &found.password).unwrap_or_else(|e| {
            tracing::error!(employee_id = found.employee_id, error = %e, "Stored password hash is unreadable");
            false
        });
        if !valid {
            return Err(AppError::invalid_credentials());
        }
        if found.status == EmployeeStatus::Inactive {
            return Err(AppError::new(ErrorCode::AccountDisabled));
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::memory_pool;

    fn create(email: &str) -> EmployeeCreate {
        serde_json::from_value(serde_json::json!({
            "givenName": "Ada",
            "surname": "Lovelace",
            "email": email,
            "password": "correct horse",
            "addrCity": "Toronto",
            "addrProv": "ON",
            "addrPostal": "M5V 2T6",
            "empManagerID": "1",
            "hireDate": "2024-03-01",
            "payRate": "21.5"
        }))
        .unwrap()
    }

    fn update_from(emp: &Employee, password: Option<&str>) -> EmployeeUpdate {
        serde_json::from_value(serde_json::json!({
            "employeeID": emp.employee_id,
            "givenName": emp.given_name,
            "surname": "Byron",
            "email": emp.email,
            "password": password,
            "payRate": emp.pay_rate
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_add_hashes_password_and_coerces_fields() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();
        assert!(emp.password.starts_with("$argon2"));
        assert_eq!(emp.emp_manager_id, Some(1));
        assert_eq!(emp.pay_rate, 21.5);
        assert_eq!(emp.status, EmployeeStatus::Active);
    }

    #[tokio::test]
    async fn test_add_rejects_bad_fields() {
        let dir = EmployeeDirectory::new(memory_pool().await);

        let mut bad = create("ada@example.com");
        bad.addr_postal = Some("12345".into());
        assert_eq!(dir.add(bad).await.unwrap_err().code, ErrorCode::ValidationFailed);

        let mut bad = create("ada@example.com");
        bad.addr_prov = Some("Texas".into());
        assert_eq!(dir.add(bad).await.unwrap_err().code, ErrorCode::ValidationFailed);

        let mut bad = create("ada@example.com");
        bad.addr_city = Some("123".into());
        assert_eq!(dir.add(bad).await.unwrap_err().code, ErrorCode::ValidationFailed);

        assert_eq!(
            dir.add(create("not-an-email")).await.unwrap_err().code,
            ErrorCode::ValidationFailed
        );
        assert!(dir.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_case_insensitive() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        dir.add(create("ada@example.com")).await.unwrap();
        let err = dir.add(create("ADA@example.com")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeEmailExists);
        assert_eq!(err.message, "Email 'ADA@example.com' is already in use.");
    }

    #[tokio::test]
    async fn test_update_keeps_hash_when_password_unchanged() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();

        // Echoing the stored hash back must not hash it again
        dir.update(update_from(&emp, Some(&emp.password))).await.unwrap();
        let after = dir.get_by_id(emp.employee_id).await.unwrap();
        assert_eq!(after.password, emp.password);
        assert_eq!(after.surname, "Byron");

        dir.update(update_from(&emp, None)).await.unwrap();
        assert_eq!(dir.get_by_id(emp.employee_id).await.unwrap().password, emp.password);
    }

    #[tokio::test]
    async fn test_update_refuses_foreign_hash() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();
        let other_hash = hash_password("something else").unwrap();

        let err = dir
            .update(update_from(&emp, Some(&other_hash)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_update_rehashes_new_password() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();
        dir.update(update_from(&emp, Some("new secret"))).await.unwrap();

        assert!(dir.authenticate("ada@example.com", "new secret").await.is_ok());
        assert!(dir.authenticate("ada@example.com", "correct horse").await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_employee() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();
        let mut data = update_from(&emp, None);
        data.employee_id = 99;
        let err = dir.update(data).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee #99 not found.");
    }

    #[tokio::test]
    async fn test_own_profile_pins_privileged_fields() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();
        let mut data = update_from(&emp, None);
        data.is_manager = true;
        data.pay_rate = 999.0;
        data.status = Some(EmployeeStatus::Inactive);

        dir.update_own_profile(data).await.unwrap();
        let after = dir.get_by_id(emp.employee_id).await.unwrap();
        assert!(!after.is_manager);
        assert_eq!(after.pay_rate, 21.5);
        assert_eq!(after.status, EmployeeStatus::Active);
        assert_eq!(after.surname, "Byron");
    }

    #[tokio::test]
    async fn test_authenticate() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();

        let ok = dir.authenticate("Ada@Example.com", "correct horse").await.unwrap();
        assert_eq!(ok.employee_id, emp.employee_id);

        let err = dir.authenticate("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        let err = dir.authenticate("nobody@example.com", "x").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        let mut data = update_from(&emp, None);
        data.status = Some(EmployeeStatus::Inactive);
        dir.update(data).await.unwrap();
        let err = dir.authenticate("ada@example.com", "correct horse").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AccountDisabled);
    }

    #[tokio::test]
    async fn test_filter_and_delete() {
        let dir = EmployeeDirectory::new(memory_pool().await);
        let emp = dir.add(create("ada@example.com")).await.unwrap();

        assert_eq!(dir.get_by_field("addrcity", "TORONTO").await.unwrap().len(), 1);
        assert!(dir.get_by_field("addrCity", "Ottawa").await.unwrap().is_empty());

        dir.delete(emp.employee_id).await.unwrap();
        let err = dir.delete(emp.employee_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
