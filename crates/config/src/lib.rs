//! granary-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）：
//! 1. 代码内置默认值
//! 2. `{config_dir}/default.toml`
//! 3. `{config_dir}/{APP_ENV}.toml`
//! 4. `GRANARY_` 前缀的环境变量，嵌套字段用 `__` 分隔

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "GRANARY_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// 加载后的配置校验
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// 遥测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 生产环境输出 JSON 日志
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// 应用基础配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "granary".to_string(),
            app_env: current_env(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// 当前运行环境，未设置时为 development
pub fn current_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// 构建分层配置源
pub fn figment<T: Serialize>(config_dir: &str, defaults: &T) -> Figment {
    let env = current_env();

    Figment::from(Serialized::defaults(defaults))
        .merge(Toml::file(format!("{}/default.toml", config_dir)))
        .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// 从配置文件和环境变量加载配置，并执行校验
pub fn load<T>(config_dir: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default + Validate,
{
    let config: T = figment(config_dir, &T::default())
        .extract()
        .map_err(Box::new)?;
    config.validate()?;
    Ok(config)
}
