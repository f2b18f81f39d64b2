use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::services::currency::CurrencyLocale;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const ROOM_CACHE_TTL_SECS: u64 = 300;
const ROOM_CACHE_CAPACITY: usize = 256;
const BACKEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("BACKEND_API_URL is not a valid url: {0}")]
    BackendUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_api_url: Option<Url>,
    pub backend_timeout: Duration,
    pub room_cache_ttl: Duration,
    pub room_cache_capacity: usize,
    pub locale: CurrencyLocale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            backend_api_url: None,
            backend_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
            room_cache_ttl: Duration::from_secs(ROOM_CACHE_TTL_SECS),
            room_cache_capacity: ROOM_CACHE_CAPACITY,
            locale: CurrencyLocale::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend_api_url = match env::var("BACKEND_API_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(Url::parse(raw.trim())?),
            _ => None,
        };

        let locale = match env::var("CURRENCY_LOCALE") {
            Ok(raw) => raw.parse::<CurrencyLocale>().map_err(|_| ConfigError::Invalid {
                name: "CURRENCY_LOCALE",
                value: raw,
            })?,
            Err(_) => defaults.locale,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            backend_api_url,
            backend_timeout: Duration::from_secs(parse_var(
                "BACKEND_TIMEOUT_SECS",
                BACKEND_TIMEOUT_SECS,
            )?),
            room_cache_ttl: Duration::from_secs(parse_var(
                "ROOM_CACHE_TTL_SECS",
                ROOM_CACHE_TTL_SECS,
            )?),
            room_cache_capacity: parse_var("ROOM_CACHE_CAPACITY", defaults.room_cache_capacity)?,
            locale,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}
