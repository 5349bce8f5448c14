//! Runtime settings, read from the environment.
//!
//! | variable                      | default                          |
//! |-------------------------------|----------------------------------|
//! | `OPENAI_API_KEY`              | unset (chat disabled)            |
//! | `OPENAI_BASE_URL`             | `https://api.openai.com/v1`      |
//! | `MACRO_COPILOT_MODEL`         | `gpt-4o-mini`                    |
//! | `MACRO_COPILOT_WORLDBANK_URL` | `https://api.worldbank.org/v2`   |
//! | `MACRO_COPILOT_RATES_URL`     | `https://api.exchangerate.host`  |
//! | `MACRO_COPILOT_FONT`          | unset (search system fonts)      |

use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "MACRO_COPILOT_MODEL";
pub const ENV_WORLDBANK_URL: &str = "MACRO_COPILOT_WORLDBANK_URL";
pub const ENV_RATES_URL: &str = "MACRO_COPILOT_RATES_URL";
pub const ENV_FONT: &str = "MACRO_COPILOT_FONT";

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Credential for the chat engine; `None` disables chat only.
    pub api_key: Option<String>,
    pub openai_url: String,
    pub model: String,
    pub world_bank_url: String,
    pub rates_url: String,
    pub font_path: Option<PathBuf>,
    pub http_timeout: Duration,
    /// Chat completions stream much longer than a data query takes.
    pub chat_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            openai_url: DEFAULT_OPENAI_URL.into(),
            model: DEFAULT_MODEL.into(),
            world_bank_url: crate::api::DEFAULT_BASE_URL.into(),
            rates_url: crate::rates::DEFAULT_BASE_URL.into(),
            font_path: None,
            http_timeout: Duration::from_secs(30),
            chat_timeout: Duration::from_secs(120),
        }
    }
}

impl Settings {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            api_key: get(ENV_API_KEY),
            openai_url: get(ENV_OPENAI_URL).unwrap_or(defaults.openai_url),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            world_bank_url: get(ENV_WORLDBANK_URL).unwrap_or(defaults.world_bank_url),
            rates_url: get(ENV_RATES_URL).unwrap_or(defaults.rates_url),
            font_path: get(ENV_FONT).map(PathBuf::from),
            ..defaults
        }
    }

    /// Replace the credential with one entered interactively (blank clears it).
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_environment_is_empty() {
        let s = Settings::from_lookup(|_| None);
        assert_eq!(s, Settings::default());
        assert!(!s.has_api_key());
    }

    #[test]
    fn reads_overrides_and_ignores_blanks() {
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, " sk-test "),
            (ENV_MODEL, "gpt-test"),
            (ENV_WORLDBANK_URL, "http://localhost:9000/v2"),
            (ENV_RATES_URL, "   "),
        ]
        .into_iter()
        .collect();
        let s = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(s.api_key.as_deref(), Some("sk-test"));
        assert_eq!(s.model, "gpt-test");
        assert_eq!(s.world_bank_url, "http://localhost:9000/v2");
        assert_eq!(s.rates_url, crate::rates::DEFAULT_BASE_URL);
    }

    #[test]
    fn interactive_key_replaces_env_key() {
        let s = Settings::default().with_api_key(Some("abc".into()));
        assert_eq!(s.api_key.as_deref(), Some("abc"));
        assert!(!s.with_api_key(Some("  ".into())).has_api_key());
    }
}
