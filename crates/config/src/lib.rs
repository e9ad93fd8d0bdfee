mod args;
mod environment;
mod error;
mod log;
mod server;

pub use args::Args;
pub use environment::Environment;
pub use error::ConfigError;
pub use log::LogConfig;
pub use server::ServerConfig;

use serde::Deserialize;

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// Top-level vars that don't belong to a section prefix.
#[derive(Debug, Deserialize)]
struct RootSection {
    #[serde(default)]
    environment: Environment,
}

impl ServiceConfig {
    /// Read and validate the whole configuration from the process
    /// environment. Called once at startup; any failure is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root: RootSection = envy::prefixed("SRA_").from_env()?;
        let server: ServerConfig = envy::prefixed("SRA_SERVER_").from_env()?;
        let log: LogConfig = envy::prefixed("SRA_LOG_").from_env()?;

        let config = Self {
            environment: root.environment,
            server,
            log,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
