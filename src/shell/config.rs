// Runtime configuration, read from the environment once at startup.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorConfig {
    Phrasebook,
    Http {
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub translator: TranslatorConfig,
    pub seed_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = parse_or(get("HOST"), "HOST", DEFAULT_HOST.parse().ok())?;
        let port = parse_or(get("PORT"), "PORT", Some(DEFAULT_PORT))?;
        let seed_data = match get("SEED_DATA") {
            None => true,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: "SEED_DATA",
                value: raw,
            })?,
        };
        let translator = match get("TRANSLATE_URL") {
            None => TranslatorConfig::Phrasebook,
            Some(base_url) => {
                let secs = parse_or(
                    get("TRANSLATE_TIMEOUT_SECS"),
                    "TRANSLATE_TIMEOUT_SECS",
                    Some(DEFAULT_TRANSLATE_TIMEOUT_SECS),
                )?;
                TranslatorConfig::Http {
                    base_url,
                    api_key: get("TRANSLATE_API_KEY"),
                    timeout: Duration::from_secs(secs),
                }
            }
        };

        Ok(Self {
            host,
            port,
            translator,
            seed_data,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Invalid {
            key,
            value: String::new(),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
