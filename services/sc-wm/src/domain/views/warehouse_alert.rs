//! 仓库告警

use serde::{Deserialize, Serialize};

use crate::domain::enums::{AlertKind, AlertSeverity, CommodityCategory};
use crate::domain::value_objects::{ItemId, WarehouseId};

/// 仓库告警
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseAlert {
    pub warehouse_id: WarehouseId,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    /// 库存告警对应的品类
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CommodityCategory>,
    pub message: String,
    pub related_item_ids: Vec<ItemId>,
}
