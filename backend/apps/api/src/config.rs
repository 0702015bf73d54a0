//! Server configuration from the environment

use anyhow::Context;
use passgen::PassgenConfig;
use scanner::ScannerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5000,http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    pub passgen: PassgenConfig,
    pub scanner: ScannerConfig,
}

impl ServerConfig {
    /// Read the process environment (call after `dotenvy::dotenv()`)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse::<SocketAddr>()?)?;

        let mut scanner = ScannerConfig::default();
        if let Some(dir) = lookup("YARA_RULES_DIR") {
            scanner.rules_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup("YARA_AGGREGATE_RULE") {
            scanner.aggregate_rule = name;
        }
        if let Some(dir) = lookup("UPLOAD_DIR") {
            scanner.upload_dir = PathBuf::from(dir);
        }
        scanner.max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", scanner.max_upload_bytes)?;
        scanner.scan_timeout = Duration::from_secs(parse_or(
            &lookup,
            "YARA_SCAN_TIMEOUT_SECS",
            scanner.scan_timeout.as_secs(),
        )?);

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
            frontend_origins,
            passgen: PassgenConfig::default(),
            scanner,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
