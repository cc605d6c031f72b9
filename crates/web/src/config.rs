use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on the number of form fields a competition may declare.
    pub max_form_fields: usize,
    pub session_ttl_hours: i64,
    /// First-admin seed, applied at startup when the username is absent.
    pub bootstrap_admin_username: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

const DEFAULT_MAX_FORM_FIELDS: usize = 5;
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            max_form_fields: match std::env::var("MAX_FORM_FIELDS") {
                Ok(raw) => raw.parse().context("MAX_FORM_FIELDS must be a number")?,
                Err(_) => DEFAULT_MAX_FORM_FIELDS,
            },
            session_ttl_hours: match std::env::var("SESSION_TTL_HOURS") {
                Ok(raw) => raw.parse().context("SESSION_TTL_HOURS must be a number")?,
                Err(_) => DEFAULT_SESSION_TTL_HOURS,
            },
            bootstrap_admin_username: std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok(),
            bootstrap_admin_password: std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
        })
    }
}
