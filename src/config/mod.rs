// src/config/mod.rs
// Environment-based configuration, loaded from .env when present

pub mod credentials;

use std::str::FromStr;
use std::time::Duration;

pub use credentials::{API_KEY_ENV_VAR, CredentialProvider, EnvCredentials, StaticCredentials};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // ── Chat completions API
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub request_timeout_secs: Option<u64>,

    // ── Server
    pub host: String,
    pub port: u16,

    // ── Logging
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

/// Parse a raw env value, tolerating surrounding whitespace and trailing `#` comments.
fn parse_value<T: FromStr>(raw: &str) -> Option<T> {
    let clean = raw.split('#').next().unwrap_or("").trim();
    if clean.is_empty() {
        return None;
    }
    clean.parse::<T>().ok()
}

fn env_var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match parse_value(&raw) {
            Some(parsed) => parsed,
            None => {
                eprintln!("Config: {} = '{}' (parse failed, using default)", key, raw);
                default
            }
        },
        None => default,
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read configuration from the process environment.
    pub fn from_env() -> Self {
        // Missing .env is normal in deployments that set real env vars
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            openai_base_url: env_var_or(&lookup, "OPENAI_BASE_URL", defaults.openai_base_url)
                .trim_end_matches('/')
                .to_string(),
            model: env_var_or(&lookup, "EXPERT_DESK_MODEL", defaults.model),
            temperature: env_var_or(&lookup, "EXPERT_DESK_TEMPERATURE", defaults.temperature),
            request_timeout_secs: lookup("EXPERT_DESK_REQUEST_TIMEOUT_SECS")
                .and_then(|raw| parse_value::<u64>(&raw))
                .filter(|secs| *secs > 0),
            host: env_var_or(&lookup, "EXPERT_DESK_HOST", defaults.host),
            port: env_var_or(&lookup, "EXPERT_DESK_PORT", defaults.port),
            log_level: env_var_or(&lookup, "EXPERT_DESK_LOG_LEVEL", defaults.log_level),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Max tracing level, falling back to INFO for unrecognized names
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
