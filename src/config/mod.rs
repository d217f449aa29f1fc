use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// 用户缓存有效期上限（30天）
pub const MAX_USER_CACHE_TTL_SECS: u64 = 30 * 24 * 3600;

/// 超时上限（10分钟）
pub const MAX_TIMEOUT_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// 用户缓存后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    Memory,
    Redis,
}

impl FromStr for CacheBackendKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "local" => Ok(CacheBackendKind::Memory),
            "redis" => Ok(CacheBackendKind::Redis),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub cache_backend: CacheBackendKind,
    pub user_cache_ttl_secs: u64,
    pub redis_timeout_ms: u64,
    pub api_url_server: String,
    pub api_timeout_ms: u64,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: DEFAULT_REDIS_URL.to_string(),
            cache_backend: CacheBackendKind::Memory,
            user_cache_ttl_secs: 1800,
            redis_timeout_ms: 500,
            api_url_server: DEFAULT_API_URL.to_string(),
            api_timeout_ms: 5000,
            server_host: "::".to_string(),
            server_port: 3000,
            api_base_uri: "/api".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// 从任意键值来源构建配置，未设置的变量使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            cache_backend: parse_or(&lookup, "USER_CACHE_BACKEND", defaults.cache_backend)?,
            user_cache_ttl_secs: parse_in_range(
                &lookup,
                "USER_CACHE_TTL",
                defaults.user_cache_ttl_secs,
                1..=MAX_USER_CACHE_TTL_SECS,
            )?,
            redis_timeout_ms: parse_in_range(
                &lookup,
                "REDIS_TIMEOUT_MS",
                defaults.redis_timeout_ms,
                1..=MAX_TIMEOUT_MS,
            )?,
            api_url_server: lookup("API_URL_SERVER")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url_server),
            api_timeout_ms: parse_in_range(
                &lookup,
                "API_TIMEOUT_MS",
                defaults.api_timeout_ms,
                1..=MAX_TIMEOUT_MS,
            )?,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            api_base_uri: lookup("API_BASE_URI").unwrap_or(defaults.api_base_uri),
        })
    }

    pub fn user_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.user_cache_ttl_secs)
    }

    pub fn redis_timeout(&self) -> Duration {
        Duration::from_millis(self.redis_timeout_ms)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_in_range<F>(
    lookup: &F,
    var: &'static str,
    default: u64,
    range: RangeInclusive<u64>,
) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, var, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(config.cache_backend, CacheBackendKind::Memory);
        assert_eq!(config.user_cache_ttl(), Duration::from_secs(1800));
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.api_base_uri, "/api");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("REDIS_URL", "redis://cache:6380"),
            ("USER_CACHE_BACKEND", "Redis"),
            ("USER_CACHE_TTL", "60"),
            ("API_URL_SERVER", "http://api:8000/"),
            ("REDIS_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.redis_url, "redis://cache:6380");
        assert_eq!(config.cache_backend, CacheBackendKind::Redis);
        assert_eq!(config.user_cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.api_url_server, "http://api:8000");
        assert_eq!(config.redis_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = Config::from_lookup(lookup_from(&[("USER_CACHE_BACKEND", "memcached")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "USER_CACHE_BACKEND", .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_ttl() {
        let err = Config::from_lookup(lookup_from(&[("USER_CACHE_TTL", "30m")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "USER_CACHE_TTL", .. }));
    }

    #[test]
    fn rejects_zero_and_oversized_ttl() {
        for value in ["0", "18446744073709551615", "2592001"] {
            let err = Config::from_lookup(lookup_from(&[("USER_CACHE_TTL", value)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var: "USER_CACHE_TTL", .. }),
                "accepted USER_CACHE_TTL={}",
                value
            );
        }

        let config = Config::from_lookup(lookup_from(&[("USER_CACHE_TTL", "2592000")])).unwrap();
        assert_eq!(config.user_cache_ttl_secs, MAX_USER_CACHE_TTL_SECS);
    }

    #[test]
    fn rejects_zero_timeouts() {
        let err = Config::from_lookup(lookup_from(&[("REDIS_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "REDIS_TIMEOUT_MS", .. }));

        let err = Config::from_lookup(lookup_from(&[("API_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "API_TIMEOUT_MS", .. }));
    }
}
