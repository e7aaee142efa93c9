//! Employee Repository

use super::{RepoError, RepoResult, bind_filter, filter_clause};
use shared::models::{
    Employee, EmployeeCreate, EmployeeField, EmployeeUpdate, FieldFilter, FilterField,
};
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "employee_id, given_name, surname, email, password, sin, addr_street, addr_city, addr_prov, addr_postal, is_manager, emp_manager_id, status, department, hire_date, pay_rate";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee ORDER BY employee_id");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_field(
    pool: &SqlitePool,
    filter: &FieldFilter<EmployeeField>,
) -> RepoResult<Vec<Employee>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM employee WHERE {} ORDER BY employee_id",
        filter_clause(filter.field.column(), &filter.value)
    );
    let query = sqlx::query_as::<_, Employee>(&sql);
    let employees = bind_filter(query, &filter.value).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE employee_id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(employee)
}

/// Case-insensitive, matching the column collation
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE email = ? COLLATE NOCASE");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(email.trim())
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn exists<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> RepoResult<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT employee_id FROM employee WHERE employee_id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(found.is_some())
}

/// Insert a new employee; `password_hash` is stored as given
pub async fn create(
    pool: &SqlitePool,
    data: &EmployeeCreate,
    password_hash: &str,
) -> RepoResult<Employee> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (given_name, surname, email, password, sin, addr_street, addr_city, addr_prov, addr_postal, is_manager, emp_manager_id, status, department, hire_date, pay_rate) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15) RETURNING employee_id",
    )
    .bind(data.given_name.trim())
    .bind(data.surname.trim())
    .bind(data.email.trim())
    .bind(password_hash)
    .bind(data.sin.as_deref())
    .bind(data.addr_street.as_deref())
    .bind(data.addr_city.as_deref())
    .bind(data.addr_prov.as_deref())
    .bind(data.addr_postal.as_deref())
    .bind(data.is_manager)
    .bind(data.emp_manager_id)
    .bind(data.status.unwrap_or_default())
    .bind(data.department)
    .bind(data.hire_date)
    .bind(data.pay_rate)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Replace every column of one employee
pub async fn update(pool: &SqlitePool, data: &EmployeeUpdate, password_hash: &str) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE employee SET given_name = ?1, surname = ?2, email = ?3, password = ?4, sin = ?5, addr_street = ?6, addr_city = ?7, addr_prov = ?8, addr_postal = ?9, is_manager = ?10, emp_manager_id = ?11, status = ?12, department = ?13, hire_date = ?14, pay_rate = ?15 WHERE employee_id = ?16",
    )
    .bind(data.given_name.trim())
    .bind(data.surname.trim())
    .bind(data.email.trim())
    .bind(password_hash)
    .bind(data.sin.as_deref())
    .bind(data.addr_street.as_deref())
    .bind(data.addr_city.as_deref())
    .bind(data.addr_prov.as_deref())
    .bind(data.addr_postal.as_deref())
    .bind(data.is_manager)
    .bind(data.emp_manager_id)
    .bind(data.status.unwrap_or_default())
    .bind(data.department)
    .bind(data.hire_date)
    .bind(data.pay_rate)
    .bind(data.employee_id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Employee #{} not found.",
            data.employee_id
        )));
    }
    Ok(())
}

/// Delete one employee; attendance rows referencing it are left alone
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE employee_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee #{id} not found.")));
    }
    Ok(())
}
