use config::{ConfigError, ServiceConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new() -> Result<Self, ConfigError> {
        let config = ServiceConfig::from_env()?;
        Ok(Self { config })
    }
}
