use anyhow::{Context, Result};

const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434/api/generate";
const DEFAULT_MODEL: &str = "mistral";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment yields a working local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Full URL of the Ollama generate endpoint.
    pub ollama_url: String,
    pub ollama_model: String,
    pub inference_timeout_secs: u64,
    /// Level for this crate's events when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            host: or_default("HOST", "127.0.0.1"),
            port: or_default("PORT", "4100")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            ollama_url: or_default("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            ollama_model: or_default("OLLAMA_MODEL", DEFAULT_MODEL),
            inference_timeout_secs: or_default("INFERENCE_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("INFERENCE_TIMEOUT_SECS must be a whole number of seconds")?,
            log_level: or_default("LOG_LEVEL", "info"),
        })
    }

    /// Fallback `EnvFilter` directive. `TraceLayer` emits request spans at DEBUG.
    pub fn log_directive(&self) -> String {
        format!(
            "{}={},tower_http=debug",
            env!("CARGO_CRATE_NAME"),
            self.log_level
        )
    }
}
