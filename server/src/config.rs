use std::{env, net::IpAddr, str::FromStr};

use thiserror::Error;
use tracing::info;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9228;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `TODO_HOST` and `TODO_PORT`. `PORT` is honored when
    /// `TODO_PORT` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = try_load(&lookup, &["TODO_HOST"], DEFAULT_HOST)?;
        let port = try_load(&lookup, &["TODO_PORT", "PORT"], &DEFAULT_PORT.to_string())?;
        Ok(Self { host, port })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    keys: &[&'static str],
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let found = keys
        .iter()
        .find_map(|key| lookup(key).map(|value| (*key, value)));

    let (key, value) = match found {
        Some(pair) => pair,
        None => {
            info!("{} not set, using default: {default}", keys[0]);
            (keys[0], default.to_string())
        }
    };

    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value,
        reason: e.to_string(),
    })
}
