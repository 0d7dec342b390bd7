use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

const API_URL_KEY: &str = "FITFEED_API_URL";
const TIMEOUT_KEY: &str = "FITFEED_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:5454/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub api_url: Url,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = Url::parse(DEFAULT_API_URL).expect("default url is valid");
        Self {
            api_url: try_load(&lookup, API_URL_KEY, fallback),
            timeout: Duration::from_secs(try_load(&lookup, TIMEOUT_KEY, DEFAULT_TIMEOUT_SECS)),
        }
    }
}

fn try_load<T: FromStr + Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T
where
    T::Err: Display,
{
    let Some(value) = lookup(key) else {
        log::info!("{key} not set, using default: {default}");
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Invalid {key} value {value:?}: {e}, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.api_url.as_str(), "http://localhost:5454/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_values() {
        let config = Config::from_lookup(|key| match key {
            API_URL_KEY => Some("https://fit.example.com/api-root".to_string()),
            TIMEOUT_KEY => Some(" 5 ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url.host_str(), Some("fit.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(|key| match key {
            API_URL_KEY => Some("not a url".to_string()),
            TIMEOUT_KEY => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
    }
}
