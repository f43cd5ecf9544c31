use secrecy::Secret;
use std::env;

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Session-signing secret; a dev default is supplied when unset.
    pub session_secret: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Gemini API credential. May be empty in dev; absence only surfaces
    /// when the upstream call fails, matching the original deployment.
    pub api_key: Secret<String>,
    /// Model for creative text generation (e.g., gemini-2.5-flash).
    pub model: String,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AppConfig {
            server: ServerConfig {
                host: get_env("APP_HOST", Some("0.0.0.0"), is_prod)?,
                port: get_env("APP_PORT", Some("5000"), is_prod)?.parse()?,
                session_secret: Secret::new(get_env(
                    "SESSION_SECRET",
                    Some("dev-secret-key"),
                    is_prod,
                )?),
            },
            gemini: GeminiSettings {
                api_key: Secret::new(get_env("GEMINI_API_KEY", Some(""), is_prod)?),
                model: get_env("GEMINI_TEXT_MODEL", Some("gemini-2.5-flash"), is_prod)?,
                timeout_secs: get_env(
                    "GEMINI_TIMEOUT_SECS",
                    Some(&DEFAULT_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> anyhow::Result<String> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                anyhow::bail!("{} is required in production but not set", key)
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                anyhow::bail!("{} is required but not set", key)
            }
        }
    }
}
