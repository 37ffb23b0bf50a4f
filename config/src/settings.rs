//! Typed intake settings read from the (already merged) process environment.

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default chat model served by [`DEFAULT_BASE_URL`].
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Transcript turns forwarded to the model on each reply.
pub const DEFAULT_HISTORY_TURNS: usize = 8;
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Runtime settings for the intake assistant.
///
/// Built by [`IntakeSettings::from_env`] after [`crate::load_and_apply`] has merged `.env` and
/// XDG values into the environment. Unset or unparsable values fall back to the defaults above.
///
/// - `OPENAI_API_KEY`: default per-session key; empty means fallback replies only.
/// - `OPENAI_BASE_URL`: chat-completion base URL.
/// - `TALENTSCOUT_MODEL`, `TALENTSCOUT_TEMPERATURE`, `TALENTSCOUT_HISTORY_TURNS`, `TALENTSCOUT_ADDR`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntakeSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub history_turns: usize,
    pub addr: String,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            history_turns: DEFAULT_HISTORY_TURNS,
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl IntakeSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup` (e.g. a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let text = |key: &str, fallback: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };
        Self {
            api_key: lookup("OPENAI_API_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            base_url: text("OPENAI_BASE_URL", default.base_url),
            model: text("TALENTSCOUT_MODEL", default.model),
            temperature: lookup("TALENTSCOUT_TEMPERATURE")
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|t| (0.0..=2.0).contains(t))
                .unwrap_or(default.temperature),
            history_turns: lookup("TALENTSCOUT_HISTORY_TURNS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.history_turns),
            addr: text("TALENTSCOUT_ADDR", default.addr),
        }
    }

    /// True when a non-empty default API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
