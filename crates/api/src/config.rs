use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: &'static str, value: String },

    #[error(transparent)]
    Llm(#[from] autopath_llm::config::ConfigError),

    #[error("Failed to build LLM client: {0}")]
    LlmClient(#[from] autopath_llm::LlmError),
}

/// Which [`CurriculumProvider`](autopath_core::provider::CurriculumProvider)
/// backs the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Deterministic lookup-table generators.
    #[default]
    Template,
    /// Chat-completions API with static fallbacks.
    OpenAi,
}

impl FromStr for ProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" | "mock" => Ok(Self::Template),
            "openai" | "llm" => Ok(Self::OpenAi),
            _ => Err(()),
        }
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    pub provider: ProviderKind,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `PROVIDER`             | `template`                 |
    /// | `LOG_FORMAT`           | `text`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host = match host.trim().parse::<IpAddr>() {
            Ok(_) => host.trim().to_string(),
            Err(_) => return Err(ConfigError::InvalidValue { var: "HOST", value: host }),
        };
        let port = parse_var(&lookup, "PORT", 8080)?;

        let cors_origins = parse_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:3000".into()),
        )?;

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 60)?;
        let provider = parse_var(&lookup, "PROVIDER", ProviderKind::default())?;
        let log_format = parse_var(&lookup, "LOG_FORMAT", LogFormat::default())?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            provider,
            log_format,
        })
    }

    /// Socket address to bind. `host` must be an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HOST",
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}

/// Split a comma-separated origin list, rejecting values that cannot be
/// used as a header.
///
/// `*` is rejected too: the CORS layer allows credentials, which requires an
/// explicit origin list.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            let invalid = || ConfigError::InvalidValue {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
            };
            if origin == "*" {
                return Err(invalid());
            }
            HeaderValue::from_str(origin)
                .map(|_| origin.to_string())
                .map_err(|_| invalid())
        })
        .collect()
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
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.provider, ProviderKind::Template);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("PROVIDER", "openai"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidValue { var: "PORT", ref value }) if value == "eighty"
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("PROVIDER", "gemini")])),
            Err(ConfigError::InvalidValue { var: "PROVIDER", .. })
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "-1")])),
            Err(ConfigError::InvalidValue { var: "REQUEST_TIMEOUT_SECS", .. })
        );
    }

    #[test]
    fn hostname_is_rejected_as_bind_address() {
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])),
            Err(ConfigError::InvalidValue { var: "HOST", .. })
        );
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "::1")])).unwrap();
        assert_eq!(config.host, "::1");
        assert_eq!(config.bind_addr().unwrap().to_string(), "[::1]:8080");
    }

    #[test]
    fn provider_kind_accepts_known_names() {
        assert_eq!("template".parse(), Ok(ProviderKind::Template));
        assert_eq!(" OpenAI ".parse(), Ok(ProviderKind::OpenAi));
        assert_eq!("gemini".parse::<ProviderKind>(), Err(()));
    }

    #[test]
    fn log_format_accepts_json() {
        assert_eq!("JSON".parse(), Ok(LogFormat::Json));
        assert_eq!("text".parse(), Ok(LogFormat::Text));
    }

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        let origins = parse_origins(" http://a.test, ,http://b.test ").unwrap();
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn origin_with_control_character_is_rejected() {
        assert_matches!(
            parse_origins("http://ok.test,http://bad\n.test"),
            Err(ConfigError::InvalidValue { var: "CORS_ORIGINS", .. })
        );
    }

    #[test]
    fn wildcard_origin_is_rejected() {
        assert_matches!(
            parse_origins("http://ok.test,*"),
            Err(ConfigError::InvalidValue { var: "CORS_ORIGINS", ref value }) if value == "*"
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("CORS_ORIGINS", "*")])),
            Err(ConfigError::InvalidValue { var: "CORS_ORIGINS", .. })
        );
    }
}
