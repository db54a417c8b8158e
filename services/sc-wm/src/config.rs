//! 服务配置

use granary_config::{AppConfig, ConfigError, Validate};
use serde::{Deserialize, Serialize};

use crate::domain::policy::EngineSettings;

/// sc-wm 服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten)]
    pub app: AppConfig,
    #[serde(default)]
    pub engine: EngineSettings,
}

impl ServiceConfig {
    /// 从配置目录加载
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        granary_config::load(config_dir)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine
            .validate()
            .map_err(|e| ConfigError::invalid(format!("engine.{}", e)))
    }
}
