use leptos::logging::warn;

use crate::i18n::Locale;

pub const DEFAULT_API_BASE: &str = "/answer/api/v1";

/// Client settings, fixed when the WASM bundle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            locale: Locale::default(),
        }
    }
}

impl ClientConfig {
    /// Reads `REVIEW_QUEUE_API_BASE` and `REVIEW_QUEUE_LOCALE` as they were at
    /// compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("REVIEW_QUEUE_API_BASE"),
            option_env!("REVIEW_QUEUE_LOCALE"),
        )
    }

    pub fn from_values(api_base: Option<&str>, locale: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        let locale = match locale.map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                warn!("[CONFIG] {}, using {}", err, Locale::default());
                Locale::default()
            }
            None => Locale::default(),
        };
        Self { api_base, locale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
    }

    #[test]
    fn test_values_override_defaults() {
        let config = ClientConfig::from_values(Some(" /api "), Some("zh_CN"));
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.locale, Locale::ZhCn);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ClientConfig::from_values(Some(""), Some("klingon"));
        assert_eq!(config, ClientConfig::default());
    }
}
