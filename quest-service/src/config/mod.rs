use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Deserialize)]
pub struct QuestConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    /// Model used for quest generation (e.g., gemini-1.5-flash-latest)
    pub model: String,
    pub api_base: String,
}

impl QuestConfig {
    /// Load configuration from the optional `configuration` file and the
    /// process environment. `.env` is read once by the binary beforehand.
    ///
    /// A missing or blank `GEMINI_API_KEY` is always an error.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = require_api_key(get_env("GEMINI_API_KEY", None, is_prod)?)?;

        Ok(QuestConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
            },
        })
    }

    /// Configuration for tests and embedding, with defaults for everything
    /// but the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        QuestConfig {
            common: core_config::Config::default(),
            gemini: GeminiSettings {
                api_key: Secret::new(api_key.into()),
                model: DEFAULT_GEMINI_MODEL.to_string(),
                api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            },
        }
    }
}

fn require_api_key(raw: String) -> Result<Secret<String>, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "GEMINI_API_KEY is set but empty"
        )));
    }
    Ok(Secret::new(raw))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
