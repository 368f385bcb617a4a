//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of step entries the step cache can hold
    pub step_cache_max_keys: usize,
    /// Maximum number of lesson results the lesson cache can hold
    pub lesson_cache_max_keys: usize,
    /// How long a lesson result is served from cache, in seconds
    pub lesson_ttl: u64,
    /// HTTP listen host
    pub server_host: String,
    /// HTTP listen port
    pub server_port: u16,
    /// Base URL of the upstream lessons API
    pub upstream_base_url: String,
    /// Timeout applied to every upstream request, in seconds
    pub upstream_timeout: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STEP_CACHE_MAX_KEYS` - Step cache capacity (default: 1000)
    /// - `LESSON_CACHE_MAX_KEYS` - Lesson cache capacity (default: 1000)
    /// - `LESSON_TTL_SECS` - Lesson result TTL in seconds (default: 120)
    /// - `SERVER_HOST` - Listen host (default: 127.0.0.1)
    /// - `SERVER_PORT` - Listen port (default: 8080)
    /// - `UPSTREAM_BASE_URL` - Upstream API root (default: https://stepik.org)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    /// - `CLEANUP_INTERVAL_SECS` - Cleanup frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            step_cache_max_keys: env_or("STEP_CACHE_MAX_KEYS", defaults.step_cache_max_keys),
            lesson_cache_max_keys: env_or("LESSON_CACHE_MAX_KEYS", defaults.lesson_cache_max_keys),
            lesson_ttl: env_or("LESSON_TTL_SECS", defaults.lesson_ttl),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream_base_url),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout),
            cleanup_interval: env_or("CLEANUP_INTERVAL_SECS", defaults.cleanup_interval),
        }
    }

    /// Lesson result TTL as a Duration.
    pub fn lesson_ttl(&self) -> Duration {
        Duration::from_secs(self.lesson_ttl)
    }

    /// Upstream request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    /// `host:port` string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_cache_max_keys: 1000,
            lesson_cache_max_keys: 1000,
            lesson_ttl: 120,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            upstream_base_url: "https://stepik.org".to_string(),
            upstream_timeout: 10,
            cleanup_interval: 30,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
