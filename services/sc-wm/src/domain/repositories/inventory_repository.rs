//! 库存仓储接口

use async_trait::async_trait;
use granary_errors::AppResult;

use crate::domain::entities::StorageItem;
use crate::domain::value_objects::WarehouseId;

/// 库存仓储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// 查询仓库内的全部批次，仓库不存在时返回空列表
    async fn find_by_warehouse(&self, warehouse_id: &WarehouseId) -> AppResult<Vec<StorageItem>>;
}
