//! Server configuration

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_PORT: u16 = 3000;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let bind_address = match var("BIND_ADDRESS") {
            Some(addr) => addr,
            None => {
                let port = match var("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(raw))?,
                    None => DEFAULT_PORT,
                };
                format!("0.0.0.0:{}", port)
            }
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            bind_address,
            gemini_api_key,
            gemini_api_base: var("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.into()),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            cors_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn api_key_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            load(&[("GEMINI_API_KEY", "  ")]),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn defaults() {
        let config = load(&[("GEMINI_API_KEY", "secret")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn port_and_bind_address() {
        let config = load(&[("GEMINI_API_KEY", "k"), ("PORT", "8081")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8081");

        let config = load(&[
            ("GEMINI_API_KEY", "k"),
            ("PORT", "8081"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");

        assert!(matches!(
            load(&[("GEMINI_API_KEY", "k"), ("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9999/v1beta/"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("STATIC_DIR", "dist"),
            ("CORS_ORIGINS", "http://localhost:5173, https://clinic.example"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_base, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://clinic.example"]
        );
    }
}
