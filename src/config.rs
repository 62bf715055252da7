//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BACKEND_URL="https://xyzcompany.supabase.co"
//! export BACKEND_ANON_KEY="eyJhbGciOi..."
//! ```
//!
//! ## Required Variables
//!
//! - `BACKEND_URL` - Base URL of the hosted backend project
//! - `BACKEND_ANON_KEY` - Public (anon) API key sent as `apikey` on every request
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BACKEND_TIMEOUT_SECONDS` - Per-request backend timeout (default: 10, max: 120)
//! - `COOKIE_SECURE` - Mark session cookies `Secure` (default: `true`)
//! - `BEHIND_PROXY` - Read client IPs from proxy headers for rate limiting (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub backend_anon_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub backend_timeout_seconds: u64,
    /// Adds the `Secure` attribute to session and flash cookies.
    /// Disable only for plain-HTTP local development.
    pub cookie_secure: bool,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_URL` or `BACKEND_ANON_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let backend_url = env::var("BACKEND_URL").context("BACKEND_URL must be set")?;
        let backend_anon_key =
            env::var("BACKEND_ANON_KEY").context("BACKEND_ANON_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let backend_timeout_seconds = env::var("BACKEND_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            backend_url,
            backend_anon_key,
            listen_addr,
            log_level,
            log_format,
            backend_timeout_seconds,
            cookie_secure,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `backend_url` is not an http(s) URL
    /// - `backend_anon_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `backend_timeout_seconds` is outside 1..=120
    pub fn validate(&self) -> Result<()> {
        if !self.backend_url.starts_with("https://") && !self.backend_url.starts_with("http://") {
            anyhow::bail!(
                "BACKEND_URL must start with 'https://' or 'http://', got '{}'",
                self.backend_url
            );
        }

        url::Url::parse(&self.backend_url)
            .with_context(|| format!("BACKEND_URL is not a valid URL: '{}'", self.backend_url))?;

        if self.backend_anon_key.trim().is_empty() {
            anyhow::bail!("BACKEND_ANON_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.backend_timeout_seconds == 0 || self.backend_timeout_seconds > 120 {
            anyhow::bail!(
                "BACKEND_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.backend_timeout_seconds
            );
        }

        Ok(())
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend: {}", self.backend_url);
        tracing::info!("  Backend key: {}", mask_secret(&self.backend_anon_key));
        tracing::info!("  Backend timeout: {}s", self.backend_timeout_seconds);
        tracing::info!("  Secure cookies: {}", self.cookie_secure);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Masks an API key for logging, keeping the first four characters.
///
/// `eyJhbGciOiJIUzI1NiJ9` → `eyJh***`
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            backend_url: "https://demo.supabase.co".to_string(),
            backend_anon_key: "anon-key".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            backend_timeout_seconds: 10,
            cookie_secure: true,
            behind_proxy: false,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh***");
        assert_eq!(mask_secret("abcd"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.backend_url = "ftp://demo".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "http://localhost:54321".to_string();
        assert!(config.validate().is_ok());

        config.backend_anon_key = "   ".to_string();
        assert!(config.validate().is_err());

        config.backend_anon_key = "anon-key".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.backend_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.backend_timeout_seconds = 121;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BACKEND_URL", "https://demo.supabase.co");
            env::set_var("BACKEND_ANON_KEY", "anon");
            env::remove_var("LISTEN");
            env::remove_var("COOKIE_SECURE");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("BACKEND_TIMEOUT_SECONDS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.backend_timeout(), Duration::from_secs(10));
        assert!(config.cookie_secure);
        assert!(!config.behind_proxy);

        unsafe {
            env::remove_var("BACKEND_URL");
            env::remove_var("BACKEND_ANON_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_flags() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BACKEND_URL", "http://localhost:54321");
            env::set_var("BACKEND_ANON_KEY", "anon");
            env::set_var("COOKIE_SECURE", "false");
            env::set_var("BEHIND_PROXY", "1");
        }

        let config = Config::from_env().unwrap();

        assert!(!config.cookie_secure);
        assert!(config.behind_proxy);

        unsafe {
            env::remove_var("BACKEND_URL");
            env::remove_var("BACKEND_ANON_KEY");
            env::remove_var("COOKIE_SECURE");
            env::remove_var("BEHIND_PROXY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_backend_url() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("BACKEND_URL");
            env::set_var("BACKEND_ANON_KEY", "anon");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("BACKEND_ANON_KEY");
        }
    }
}
