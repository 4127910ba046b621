use std::fmt;

use crate::types::Category;

pub const MODEL_ID: &str = "llama3-groq-8b-8192-tool-use-preview";
pub const DUMMY_MODEL: &str = "dummy";
pub const SLACK_CHANNEL: &str = "#ai";

pub const SEARCH_WINDOW_HOURS: i64 = 24;
/// Tolerated clock drift for hits stamped slightly in the future.
pub const SEARCH_FUTURE_SKEW_MINUTES: i64 = 5;
pub const SEARCH_TIMEOUT_SECS: u64 = 120;

pub const MAX_DIGEST_ITEMS: usize = 5;
pub const DIGEST_TITLE: &str = "AI News Update";
pub const NO_UPDATES_MESSAGE: &str = "No major updates today.";

pub const NEWS_CATEGORIES: [Category; 4] = [
    Category {
        key: "model_releases",
        query: "new AI model releases announcements",
    },
    Category {
        key: "multimodal",
        query: "multimodal AI developments breakthroughs",
    },
    Category {
        key: "agents",
        query: "AI agent systems autonomous agents",
    },
    Category {
        key: "companies",
        query: "OpenAI Anthropic Google DeepMind news updates",
    },
];

pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const SLACK_TOKEN_VAR: &str = "SLACK_TOKEN";
pub const MODEL_VAR: &str = "AINEWS_MODEL";

/// Credentials and overrides read from the process environment.
///
/// Missing credentials are kept as `None`; the remote APIs reject the
/// request and that rejection is what the caller sees.
#[derive(Clone)]
pub struct Settings {
    pub groq_api_key: Option<String>,
    pub slack_token: Option<String>,
    pub model_name: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            groq_api_key: non_empty(GROQ_API_KEY_VAR),
            slack_token: non_empty(SLACK_TOKEN_VAR),
            model_name: non_empty(MODEL_VAR).unwrap_or_else(|| MODEL_ID.to_string()),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("groq_api_key", &self.groq_api_key.as_deref().map(|_| "<redacted>"))
            .field("slack_token", &self.slack_token.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert!(settings.groq_api_key.is_none());
        assert!(settings.slack_token.is_none());
        assert_eq!(settings.model_name, MODEL_ID);
    }

    #[test]
    fn test_settings_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (GROQ_API_KEY_VAR, "gsk-test"),
            (SLACK_TOKEN_VAR, "xoxb-test"),
            (MODEL_VAR, "   "),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(settings.groq_api_key.as_deref(), Some("gsk-test"));
        assert_eq!(settings.slack_token.as_deref(), Some("xoxb-test"));
        assert_eq!(settings.model_name, MODEL_ID);
    }

    #[test]
    fn test_settings_debug_redacts_secrets() {
        let settings = Settings::from_lookup(|k| Some(format!("secret-{}", k)));
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("secret-GROQ_API_KEY"));
        assert!(!debug.contains("secret-SLACK_TOKEN"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_fixed_categories() {
        let keys: Vec<_> = NEWS_CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["model_releases", "multimodal", "agents", "companies"]);
    }
}
