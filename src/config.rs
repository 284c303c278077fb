use crate::i18n::FallbackPolicy;
use crate::routing::parse_redirect_status;
use anyhow::{anyhow, Context, Result};
use axum::http::StatusCode;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub base_url: String,

    // Locales
    pub locales_dir: PathBuf,
    pub supported_locales: Vec<String>,
    pub default_locale: String,

    // Routing
    pub redirect_status: StatusCode,

    // Translation
    pub missing_key_fallback: FallbackPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8080");
        let redirect_status = var("REDIRECT_STATUS", "307");
        let fallback = var("MISSING_KEY_FALLBACK", "default-locale");

        let supported_locales: Vec<String> = var("SUPPORTED_LOCALES", "en,id")
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        Ok(Self {
            // Server
            port: port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            base_url: var("BASE_URL", "https://balitecture.com")
                .trim()
                .trim_end_matches('/')
                .to_string(),

            // Locales
            locales_dir: PathBuf::from(var("LOCALES_DIR", "locales")),
            supported_locales,
            default_locale: var("DEFAULT_LOCALE", "en").trim().to_string(),

            // Routing
            redirect_status: parse_redirect_status(&redirect_status)
                .map_err(|e| anyhow!(e))
                .context("REDIRECT_STATUS is invalid")?,

            // Translation
            missing_key_fallback: fallback
                .parse::<FallbackPolicy>()
                .map_err(|e| anyhow!(e))
                .context("MISSING_KEY_FALLBACK is invalid")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "https://balitecture.com");
        assert_eq!(config.locales_dir, PathBuf::from("locales"));
        assert_eq!(config.supported_locales, vec!["en", "id"]);
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.redirect_status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(config.missing_key_fallback, FallbackPolicy::DefaultLocale);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("BASE_URL", "https://staging.balitecture.com/"),
            ("SUPPORTED_LOCALES", " id , en ,"),
            ("DEFAULT_LOCALE", "id"),
            ("REDIRECT_STATUS", "308"),
            ("MISSING_KEY_FALLBACK", "strict"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.base_url, "https://staging.balitecture.com");
        assert_eq!(config.supported_locales, vec!["id", "en"]);
        assert_eq!(config.default_locale, "id");
        assert_eq!(config.redirect_status, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(config.missing_key_fallback, FallbackPolicy::Strict);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("REDIRECT_STATUS", "200")]).is_err());
        assert!(config_from(&[("MISSING_KEY_FALLBACK", "silent")]).is_err());
    }

    #[test]
    fn test_error_names_the_variable() {
        let err = config_from(&[("REDIRECT_STATUS", "404")]).unwrap_err();
        assert!(err.to_string().contains("REDIRECT_STATUS"));
    }
}
