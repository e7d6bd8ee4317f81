use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Remote API root; relative media paths are resolved against it too.
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    const DEFAULT_PORT: u16 = 8080;
    const DEFAULT_API: &'static str = "http://127.0.0.1:8000";
    const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

    /// Reads the process environment. `.env` is loaded by `main` beforehand.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {raw}"))?,
            None => Self::DEFAULT_PORT,
        };

        let api_base_url = var("API")
            .unwrap_or_else(|| Self::DEFAULT_API.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_timeout_secs = match var("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("API_TIMEOUT_SECS must be a valid number, got {raw}"))?,
            None => Self::DEFAULT_API_TIMEOUT_SECS,
        };

        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let template_dir = var("TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| manifest_dir.join("public"));
        let static_dir = var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| manifest_dir.join("public").join("static"));

        Ok(Self {
            host,
            port,
            api_base_url,
            api_timeout: Duration::from_secs(api_timeout_secs),
            template_dir,
            static_dir,
        })
    }

    /// Glob handed to `Tera::new`.
    pub fn template_glob(&self) -> String {
        format!("{}/**/*.html", self.template_dir.display())
    }
}
