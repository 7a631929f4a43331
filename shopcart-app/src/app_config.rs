use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".into()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layers `<dir>/default`, `<dir>/local`, then `SHOPCART__*` variables.
    /// Every source is optional.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        Self::load_layers(dir, env_source())
    }

    fn load_layers(dir: &str, env: config::Environment) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(env)
            .build()?;

        s.try_deserialize()
    }
}

/// Eg. `SHOPCART__LOGGING__FILTER=debug`
fn env_source() -> config::Environment {
    config::Environment::with_prefix("SHOPCART").separator("__")
}
