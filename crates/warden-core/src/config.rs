//! Warden configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// BCP-47 locale tag used for group name collation
    pub locale: String,
}

impl Config {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Detect the locale from the environment.
    ///
    /// `WARDEN_LOCALE` takes a BCP-47 tag directly; otherwise the usual
    /// POSIX variables are consulted and normalized. Falls back to the root
    /// locale, which still collates deterministically.
    pub fn from_env() -> Self {
        let locale = std::env::var("WARDEN_LOCALE")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| {
                ["LC_ALL", "LC_MESSAGES", "LANG"]
                    .iter()
                    .find_map(|var| std::env::var(var).ok().as_deref().and_then(posix_to_bcp47))
            })
            .unwrap_or_else(|| "und".to_string());

        Self { locale }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("und")
    }
}

/// Convert a POSIX locale value like `en_US.UTF-8` to a BCP-47 tag.
/// `C` and `POSIX` carry no language information.
fn posix_to_bcp47(value: &str) -> Option<String> {
    let value = value.split('.').next().unwrap_or(value);
    if value.is_empty() || value == "C" || value == "POSIX" {
        return None;
    }
    Some(value.replace('_', "-"))
}
