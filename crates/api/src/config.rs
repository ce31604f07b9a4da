use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the admin password have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Interval between keep-alive pings in seconds (default: `25`).
    pub db_keepalive_secs: u64,
    /// Admin password hash and session cookie settings.
    pub session: SessionConfig,
    /// Where uploaded images go.
    pub uploads: UploadConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `DB_KEEPALIVE_SECS`    | `25`                       |
    ///
    /// See [`SessionConfig::from_env`] and [`UploadConfig::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| makerslab_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let db_keepalive_secs: u64 = std::env::var("DB_KEEPALIVE_SECS")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("DB_KEEPALIVE_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            db_keepalive_secs,
            session: SessionConfig::from_env(),
            uploads: UploadConfig::from_env(),
        }
    }
}

/// Which blob backend receives new uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadBackend {
    Local,
    S3,
}

impl FromStr for UploadBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(format!("unknown upload backend '{other}' (expected local or s3)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub backend: UploadBackend,
    /// Local upload directory. Always served under `/uploads`, whichever
    /// backend takes new uploads.
    pub dir: PathBuf,
    pub s3_bucket: Option<String>,
    pub s3_key_prefix: String,
}

impl UploadConfig {
    /// | Env Var          | Default                        |
    /// |------------------|--------------------------------|
    /// | `UPLOAD_BACKEND` | `local`                        |
    /// | `UPLOAD_DIR`     | `uploads`                      |
    /// | `S3_BUCKET`      | required when backend is `s3`  |
    /// | `S3_KEY_PREFIX`  | `uploads`                      |
    pub fn from_env() -> Self {
        let backend: UploadBackend = std::env::var("UPLOAD_BACKEND")
            .unwrap_or_else(|_| "local".into())
            .parse()
            .unwrap_or_else(|e| panic!("UPLOAD_BACKEND: {e}"));

        let dir = PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let s3_bucket = std::env::var("S3_BUCKET").ok().filter(|b| !b.is_empty());
        if backend == UploadBackend::S3 && s3_bucket.is_none() {
            panic!("S3_BUCKET must be set when UPLOAD_BACKEND=s3");
        }

        let s3_key_prefix = std::env::var("S3_KEY_PREFIX").unwrap_or_else(|_| "uploads".into());

        Self {
            backend,
            dir,
            s3_bucket,
            s3_key_prefix,
        }
    }
}
