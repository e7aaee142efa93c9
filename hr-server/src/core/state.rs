use crate::auth::SessionStore;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{AttendanceLedger, EarningsService, EmployeeDirectory, ShiftCatalog};
use crate::utils::AppError;

/// Server state - shared handles to every service
///
/// Cloning is cheap: the pool, the session table and the ledger's lock
/// table are all reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | db | SQLite pool |
/// | sessions | logged-in employees |
/// | shifts | [`ShiftCatalog`] |
/// | employees | [`EmployeeDirectory`] |
/// | attendance | [`AttendanceLedger`] |
/// | earnings | [`EarningsService`] |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub sessions: SessionStore,
    pub shifts: ShiftCatalog,
    pub employees: EmployeeDirectory,
    pub attendance: AttendanceLedger,
    pub earnings: EarningsService,
}

impl ServerState {
    /// Build the state around an open database
    pub fn new(config: Config, db: DbService) -> Self {
        let pool = db.pool.clone();
        Self {
            sessions: SessionStore::new(config.session_ttl),
            shifts: ShiftCatalog::new(pool.clone()),
            employees: EmployeeDirectory::new(pool.clone()),
            attendance: AttendanceLedger::new(pool.clone()),
            earnings: EarningsService::new(pool),
            config,
            db,
        }
    }

    /// Open the database named in `config` and build the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }
}
