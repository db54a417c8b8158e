//! 天气服务接口

use async_trait::async_trait;
use granary_errors::AppResult;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EnvironmentReading, ForecastDay, WarehouseId};

/// 仓库所在地的当前天气和短期预报
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: EnvironmentReading,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

/// 天气服务
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// 未知仓库返回 None
    async fn report(&self, warehouse_id: &WarehouseId) -> AppResult<Option<WeatherReport>>;
}
