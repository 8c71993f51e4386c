use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | HTTP_PORT | 3001 | HTTP service port |
/// | DATABASE_PATH | fripe.db | SQLite database file |
/// | ENVIRONMENT | development | Runtime environment |
/// | MAIL_RELAY_URL | (unset) | Mail relay endpoint; unset disables email |
/// | MAIL_FROM | no-reply@fripe.tn | Sender address for notifications |
/// | LOG_DIR | (unset) | Optional directory for daily log files |
///
/// JWT settings are read by [`JwtConfig`] (JWT_SECRET, JWT_EXPIRATION_MINUTES,
/// JWT_ISSUER, JWT_AUDIENCE).
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/fripe.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// JWT validation configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Mail relay endpoint for order notifications (None = disabled)
    pub mail_relay_url: Option<String>,
    /// Sender address for notification emails
    pub mail_from: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "fripe.db".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            mail_relay_url: std::env::var("MAIL_RELAY_URL").ok().filter(|v| !v.is_empty()),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "no-reply@fripe.tn".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
