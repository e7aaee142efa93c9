use std::time::Duration;

/// Default origins allowed by CORS
const DEFAULT_CORS_ORIGINS: &str = "https://employee-manager-ui.vercel.app,http://localhost:8080";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | listening port |
/// | DATABASE_URL | sqlite:hr.db | SQLite database location |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | SESSION_TTL_MINUTES | 30 | sliding session expiry |
/// | CORS_ORIGINS | UI origin, localhost | comma separated |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log files when set |
/// | COOKIE_SECURE | true outside development | `Secure` cookie attribute |
///
/// ```ignore
/// HTTP_PORT=3000 DATABASE_URL=sqlite:/data/hr.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub session_ttl: Duration,
    pub cors_origins: Vec<String>,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(environment != "development");

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:hr.db".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            session_ttl: Duration::from_secs(
                std::env::var("SESSION_TTL_MINUTES")
                    .ok()
                    .and_then(|p| p.parse::<u64>().ok())
                    .unwrap_or(30)
                    * 60,
            ),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
            ),
            environment,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            cookie_secure,
        }
    }

    /// Configuration for tests: in-memory database, insecure cookies
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            session_ttl: Duration::from_secs(30 * 60),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            environment: "development".into(),
            log_level: "debug".into(),
            log_dir: None,
            cookie_secure: false,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a comma separated origin list; trailing slashes are dropped since
/// browsers never send them in `Origin`
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
