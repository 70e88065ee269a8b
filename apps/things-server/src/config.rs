//! Layered server configuration.
//!
//! Sources, lowest precedence first: compiled defaults, the YAML file,
//! `THINGS__`-prefixed environment variables (`__` separates nesting levels,
//! e.g. `THINGS__LOGGING__LEVEL=debug`).
//!
//! Maps merge key by key, so a file that lists a single operation under
//! `access_control.operations` overrides that operation and keeps the rest
//! of the built-in catalog. Lists such as `api_gateway.routes` are replaced
//! wholesale.

use std::path::Path;

use access_control::AccessControlConfig;
use api_gateway::ApiGatewayConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use static_caller_plugin::StaticCallerPluginConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/things.yaml";
pub const ENV_PREFIX: &str = "THINGS__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_gateway: ApiGatewayConfig,
    pub logging: LoggingConfig,
    pub authn: StaticCallerPluginConfig,
    pub access_control: AccessControlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration, reading `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] naming the offending key when a source
    /// holds an unknown field or a value of the wrong type.
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
