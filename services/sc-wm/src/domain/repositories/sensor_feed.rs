//! 传感器数据接口

use async_trait::async_trait;
use granary_errors::AppResult;

use crate::domain::value_objects::{SensorSample, WarehouseId};

/// 仓内实时传感器
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensorFeed: Send + Sync {
    /// 最近一段时间的样本
    async fn recent_samples(&self, warehouse_id: &WarehouseId) -> AppResult<Vec<SensorSample>>;
}
