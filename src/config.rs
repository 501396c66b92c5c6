//! Runtime configuration.
//!
//! Everything has a default; the environment can override the output path and
//! the user agent sent with the request.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the JSON document lands when nothing overrides it.
pub const DEFAULT_OUTPUT_PATH: &str = "doc/json-body/response.json";

pub const OUTPUT_ENV: &str = "PAGEJSON_OUTPUT";
pub const USER_AGENT_ENV: &str = "PAGEJSON_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File the extraction result is written to. Its parent directory must exist.
    pub output_path: PathBuf,

    /// User agent for the page request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: format!("pagejson/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Defaults, overridden by `PAGEJSON_OUTPUT` and `PAGEJSON_USER_AGENT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = lookup(OUTPUT_ENV) {
            if path.trim().is_empty() {
                return Err(Error::Config(format!("{} is set but empty", OUTPUT_ENV)));
            }
            builder = builder.output_path(path);
        }

        if let Some(agent) = lookup(USER_AGENT_ENV) {
            if agent.trim().is_empty() {
                return Err(Error::Config(format!("{} is set but empty", USER_AGENT_ENV)));
            }
            builder = builder.user_agent(agent);
        }

        Ok(builder.build())
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_fixed_relative_path() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.output_path, PathBuf::from("doc/json-body/response.json"));
        assert!(config.user_agent.starts_with("pagejson/"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (OUTPUT_ENV, "/tmp/out.json"),
            (USER_AGENT_ENV, "test-agent/1.0"),
        ]))
        .unwrap();
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn empty_override_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(OUTPUT_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup_from(&[(USER_AGENT_ENV, "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = Config::builder()
            .output_path("result.json")
            .user_agent("agent")
            .build();
        assert_eq!(config.output_path, PathBuf::from("result.json"));
        assert_eq!(config.user_agent, "agent");
    }
}
