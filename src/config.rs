use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::services::activities_service::SignupPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    Port(String),
    #[error("invalid ENFORCE_CAPACITY value {0:?}, expected true or false")]
    EnforceCapacity(String),
    #[error("cannot parse listen address {0:?}")]
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub signup_policy: SignupPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            signup_policy: SignupPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ENFORCE_CAPACITY` from the
    /// environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Port(v))?,
            None => defaults.port,
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let enforce_capacity = match lookup("ENFORCE_CAPACITY") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::EnforceCapacity(v))?,
            None => defaults.signup_policy.enforce_capacity,
        };

        Ok(Self {
            host,
            port,
            static_dir,
            signup_policy: SignupPolicy { enforce_capacity },
        })
    }

    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
