use std::path::PathBuf;

use actix_web::cookie::Key;

use crate::upload::application::domain::policies::UploadPolicy;

/// Minimum secret length accepted by the session key derivation.
pub const MIN_SESSION_SECRET_BYTES: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub keep_rejected_uploads: bool,
    pub session_secret: Option<String>,
    pub session_cookie_secure: bool,
    pub run_migrations: bool,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_UPLOAD_DIR: &'static str = "./uploads";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .or_else(|| get("DB_URI"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => Self::DEFAULT_PORT,
        };

        let upload_dir = get("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_UPLOAD_DIR));

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => {
                let n = parse_number::<usize>("MAX_UPLOAD_BYTES", &raw)?;
                if n == 0 {
                    return Err(invalid("MAX_UPLOAD_BYTES", &raw, "must be greater than zero"));
                }
                n
            }
            None => UploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES,
        };

        let keep_rejected_uploads =
            parse_flag("KEEP_REJECTED_UPLOADS", get("KEEP_REJECTED_UPLOADS"), true)?;
        let session_cookie_secure =
            parse_flag("SESSION_COOKIE_SECURE", get("SESSION_COOKIE_SECURE"), false)?;
        let run_migrations = parse_flag("RUN_MIGRATIONS", get("RUN_MIGRATIONS"), true)?;

        let session_secret = get("SESSION_SECRET");
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SESSION_SECRET_BYTES {
                return Err(ConfigError::Invalid {
                    name: "SESSION_SECRET",
                    value: "<redacted>".to_string(),
                    reason: format!("must be at least {MIN_SESSION_SECRET_BYTES} bytes"),
                });
            }
        }

        Ok(Self {
            database_url,
            host,
            port,
            upload_dir,
            max_upload_bytes,
            keep_rejected_uploads,
            session_secret,
            session_cookie_secure,
            run_migrations,
        })
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::new(self.max_upload_bytes, self.keep_rejected_uploads)
    }

    /// Signing and encryption key for the session cookie. Without a
    /// configured secret a random key is used, so sessions end on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => Key::generate(),
        }
    }
}

fn invalid(name: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid(name, raw, &e.to_string()))
}

fn parse_flag(name: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, &raw, "expected true or false")),
    }
}
