use crate::error::{LcdError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_STAKING_DENOM: &str = "uakt";
pub const DEFAULT_ACCOUNT_PREFIX: &str = "akash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub lcd_url: String,
    pub staking_denom: String,
    pub account_prefix: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(lcd_url: impl Into<String>) -> Self {
        Self {
            lcd_url: lcd_url.into(),
            staking_denom: DEFAULT_STAKING_DENOM.to_string(),
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_with_url(None)
    }

    /// Like [`from_env`](Self::from_env), with `lcd_url` taking precedence over `LCD_URL`.
    pub fn from_env_with_url(lcd_url: Option<String>) -> Result<Self> {
        Self::from_lookup(lcd_url, |key| env::var(key).ok())
    }

    fn from_lookup<F>(lcd_url: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lcd_url = match lcd_url.or_else(|| lookup("LCD_URL")) {
            Some(url) => url,
            None => return Err(LcdError::Config("LCD_URL must be set".into())),
        };
        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| LcdError::Config(format!("REQUEST_TIMEOUT_SECS: {}", e)))?;

        Ok(Self {
            lcd_url,
            staking_denom: lookup("STAKING_DENOM")
                .unwrap_or_else(|| DEFAULT_STAKING_DENOM.to_string()),
            account_prefix: lookup("ACCOUNT_PREFIX")
                .unwrap_or_else(|| DEFAULT_ACCOUNT_PREFIX.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn validator_prefix(&self) -> String {
        format!("{}valoper", self.account_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_target_akash() {
        let config = Config::new("http://localhost:1317");
        assert_eq!(config.staking_denom, "uakt");
        assert_eq!(config.validator_prefix(), "akashvaloper");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_url_wins() {
        let lookup = vars(&[("LCD_URL", "http://env:1317")]);
        let config = Config::from_lookup(Some("http://node:1317".into()), lookup).unwrap();
        assert_eq!(config.lcd_url, "http://node:1317");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let lookup = vars(&[
            ("LCD_URL", "http://env:1317"),
            ("STAKING_DENOM", "ustake"),
            ("ACCOUNT_PREFIX", "cosmos"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]);
        let config = Config::from_lookup(None, lookup).unwrap();
        assert_eq!(config.lcd_url, "http://env:1317");
        assert_eq!(config.staking_denom, "ustake");
        assert_eq!(config.validator_prefix(), "cosmosvaloper");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_url_and_bad_timeout_are_config_errors() {
        assert!(matches!(
            Config::from_lookup(None, vars(&[])),
            Err(LcdError::Config(_))
        ));
        let lookup = vars(&[("REQUEST_TIMEOUT_SECS", "soon")]);
        assert!(matches!(
            Config::from_lookup(Some("http://node".into()), lookup),
            Err(LcdError::Config(_))
        ));
    }
}
