/// Default chat-completions base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default timeout for a single completion call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Errors raised while reading LLM configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set when the openai provider is selected")]
    MissingApiKey,

    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Connection settings for the chat-completions API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Fixed timeout for one completion call.
    pub timeout_secs: u64,
    pub temperature: f32,
}

impl LlmConfig {
    /// Config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default                      |
    /// |-----------------------|------------------------------|
    /// | `OPENAI_API_KEY`      | (required)                   |
    /// | `OPENAI_BASE_URL`     | `https://api.openai.com/v1`  |
    /// | `OPENAI_MODEL`        | `gpt-4o-mini`                |
    /// | `OPENAI_TIMEOUT_SECS` | `30`                         |
    /// | `OPENAI_TEMPERATURE`  | `0.7`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LlmConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let timeout_secs = parse_var(&lookup, "OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let temperature = parse_var(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?;

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
            temperature,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn new_fills_defaults() {
        let config = LlmConfig::new("sk-test");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn lookup_with_only_a_key_uses_defaults() {
        let config =
            LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-live")])).unwrap();
        assert_eq!(config.api_key, "sk-live");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = LlmConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_MODEL", "llama3"),
            ("OPENAI_TIMEOUT_SECS", " 5 "),
            ("OPENAI_TEMPERATURE", "0.2"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert_matches!(
            LlmConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingApiKey)
        );
        assert_matches!(
            LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn bad_numbers_are_rejected_with_the_variable_name() {
        assert_matches!(
            LlmConfig::from_lookup(lookup_from(&[
                ("OPENAI_API_KEY", "sk-live"),
                ("OPENAI_TIMEOUT_SECS", "soon"),
            ])),
            Err(ConfigError::InvalidValue { var: "OPENAI_TIMEOUT_SECS", ref value }) if value == "soon"
        );
        assert_matches!(
            LlmConfig::from_lookup(lookup_from(&[
                ("OPENAI_API_KEY", "sk-live"),
                ("OPENAI_TEMPERATURE", "warm"),
            ])),
            Err(ConfigError::InvalidValue { var: "OPENAI_TEMPERATURE", .. })
        );
    }
}
