//! Build-time configuration.
//!
//! The app ships as static files, so settings are baked in at compile
//! time from environment variables and fall back to defaults.

/// Base path of the backend API when `BAIRROS_API_BASE` is not set.
/// Trunk's dev server proxies it to the backend.
const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    /// Reads `BAIRROS_API_BASE` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("BAIRROS_API_BASE"))
    }

    fn with_api_base(value: Option<&str>) -> Self {
        let api_base = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}
