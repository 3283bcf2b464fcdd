use std::{env, path::PathBuf, str::FromStr, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub content_path: Option<PathBuf>,
    pub rng_seed: Option<u64>,
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            content_path: None,
            rng_seed: None,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_var(&lookup, "PORT").unwrap_or(DEFAULT_PORT);
        let content_path = lookup("APP_CONTENT_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let rng_seed = parse_var(&lookup, "APP_RNG_SEED");
        let ttl_secs =
            parse_var(&lookup, "APP_SESSION_TTL_SECS").unwrap_or(DEFAULT_SESSION_TTL_SECS);

        Self {
            port,
            content_path,
            rng_seed,
            session_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = lookup(key)?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid {key}={value:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(cfg.content_path.is_none());
        assert!(cfg.rng_seed.is_none());
        assert_eq!(cfg.session_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn reads_values() {
        let cfg = config(&[
            ("PORT", "9001"),
            ("APP_CONTENT_PATH", "content.json"),
            ("APP_RNG_SEED", " 42 "),
            ("APP_SESSION_TTL_SECS", "5"),
        ]);
        assert_eq!(cfg.port, 9001);
        assert_eq!(cfg.content_path, Some(PathBuf::from("content.json")));
        assert_eq!(cfg.rng_seed, Some(42));
        assert_eq!(cfg.session_ttl, Duration::from_secs(5));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let cfg = config(&[("PORT", "http"), ("APP_RNG_SEED", "-1"), ("APP_CONTENT_PATH", " ")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(cfg.rng_seed.is_none());
        assert!(cfg.content_path.is_none());
    }
}
