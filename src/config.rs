// src/config.rs
use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// How request-time failures are turned into an HTTP status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Always 200, the body carries the apology text.
    #[default]
    Ok,
    /// Upstream failures surface as 502 Bad Gateway.
    Mapped,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(ErrorPolicy::Ok),
            "mapped" => Ok(ErrorPolicy::Mapped),
            other => Err(ConfigError::UnknownErrorPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub system_prompt: String,
    pub bind_addr: SocketAddr,
    pub template_dir: PathBuf,
    pub error_policy: ErrorPolicy,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let api_base = get("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let error_policy = match get("RELAY_ERROR_STATUS") {
            Some(v) => v.parse()?,
            None => ErrorPolicy::default(),
        };

        Ok(Self {
            api_key,
            api_base,
            model: get("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_prompt: SYSTEM_PROMPT.to_string(),
            bind_addr,
            template_dir: PathBuf::from(
                get("TEMPLATE_DIR").unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.to_string()),
            ),
            error_policy,
        })
    }

    pub fn index_page(&self) -> PathBuf {
        self.template_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_VAR));
    }

    #[test]
    fn blank_key_is_missing() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_VAR));
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.model, "gpt-4");
        assert_eq!(cfg.system_prompt, "You are a helpful AI assistant.");
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.index_page(), PathBuf::from("templates/index.html"));
        assert_eq!(cfg.error_policy, ErrorPolicy::Ok);
    }

    #[test]
    fn overrides_apply() {
        let cfg = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("CHAT_MODEL", "gpt-3.5-turbo"),
            ("BIND_ADDR", "127.0.0.1:5000"),
            ("RELAY_ERROR_STATUS", "Mapped"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base, "http://localhost:8080/v1");
        assert_eq!(cfg.model, "gpt-3.5-turbo");
        assert_eq!(cfg.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.error_policy, ErrorPolicy::Mapped);
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "k"), ("BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn status_code_is_not_a_policy() {
        let err = "200".parse::<ErrorPolicy>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownErrorPolicy("200".to_string()));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            ("RELAY_ERROR_STATUS", "teapot"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::UnknownErrorPolicy("teapot".to_string()));
    }
}
