//! 静态库存目录
//!
//! 替代外部库存服务：内置演示数据，或从 JSON 文件加载

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use granary_domain_core::{Quantity, Unit};
use granary_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::entities::StorageItem;
use crate::domain::enums::CommodityCategory;
use crate::domain::repositories::InventoryRepository;
use crate::domain::value_objects::{Sensitivity, WarehouseId};

/// 目录文件中的单个仓库
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseInventory {
    pub warehouse_id: WarehouseId,
    pub items: Vec<StorageItem>,
}

/// 内存库存目录
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: HashMap<WarehouseId, Vec<StorageItem>>,
}

impl StaticCatalog {
    pub fn new(inventories: Vec<WarehouseInventory>) -> Self {
        let mut items: HashMap<WarehouseId, Vec<StorageItem>> = HashMap::new();
        for inventory in inventories {
            items
                .entry(inventory.warehouse_id)
                .or_default()
                .extend(inventory.items);
        }
        Self { items }
    }

    /// 从 JSON 文件加载
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::configuration(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let inventories: Vec<WarehouseInventory> = serde_json::from_str(&content).map_err(|e| {
            AppError::validation(format!("Invalid catalog {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), warehouses = inventories.len(), "Catalog loaded");
        Ok(Self::new(inventories))
    }

    /// 演示用库存
    pub fn seeded() -> Self {
        let item = |id: &str, name: &str, category, days, value, unit| {
            StorageItem::new(id, name, category, days, Quantity::new(value, unit))
        };

        Self::new(vec![
            WarehouseInventory {
                warehouse_id: WarehouseId::new("W01"),
                items: vec![
                    item("W01-RICE-01", "Basmati Rice", CommodityCategory::Grain, 180, 12.0, Unit::tonne()),
                    item("W01-WHEAT-01", "Durum Wheat", CommodityCategory::Grain, 240, 20.0, Unit::tonne()),
                    item("W01-DAL-01", "Toor Dal", CommodityCategory::Pulse, 150, 4.5, Unit::tonne()),
                    item("W01-ONION-01", "Red Onions", CommodityCategory::Vegetable, 30, 800.0, Unit::kilogram()),
                    item("W01-TOMATO-01", "Tomatoes", CommodityCategory::Vegetable, 10, 120.0, Unit::crate_box())
                        .with_sensitivity(Sensitivity::new(0.6, 0.3)),
                    item("W01-MANGO-01", "Alphonso Mangoes", CommodityCategory::Fruit, 12, 90.0, Unit::crate_box()),
                ],
            },
            WarehouseInventory {
                warehouse_id: WarehouseId::new("W02"),
                items: vec![
                    item("W02-MILK-01", "Fresh Milk", CommodityCategory::Dairy, 7, 1500.0, Unit::liter()),
                    item("W02-PANEER-01", "Paneer", CommodityCategory::Dairy, 14, 250.0, Unit::kilogram()),
                    item("W02-CHICKEN-01", "Chicken", CommodityCategory::Meat, 5, 400.0, Unit::kilogram()),
                    item("W02-APPLE-01", "Apples", CommodityCategory::Fruit, 60, 200.0, Unit::crate_box()),
                ],
            },
        ])
    }

    pub fn warehouse_count(&self) -> usize {
        self.items.len()
    }
}

#[async_trait]
impl InventoryRepository for StaticCatalog {
    async fn find_by_warehouse(&self, warehouse_id: &WarehouseId) -> AppResult<Vec<StorageItem>> {
        let items = self.items.get(warehouse_id).cloned().unwrap_or_default();
        debug!(warehouse_id = %warehouse_id, count = items.len(), "Catalog lookup");
        Ok(items)
    }
}
