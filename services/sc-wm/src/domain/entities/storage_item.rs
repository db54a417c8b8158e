//! 库存批次实体

use granary_domain_core::{Entity, Quantity};
use serde::{Deserialize, Serialize};

use crate::domain::enums::CommodityCategory;
use crate::domain::errors::ShelfLifeError;
use crate::domain::value_objects::{ItemId, Sensitivity};

/// 库存批次
///
/// 由外部目录提供，计算期间只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageItem {
    pub id: ItemId,
    pub name: String,
    pub category: CommodityCategory,
    /// 理想条件下的保质期（天）
    ///
    /// 按目录原值接收，负数、小数由 `validate` 拒绝，不影响同一目录中的其他批次
    pub base_shelf_life_days: f64,
    /// 批次自带的敏感系数；为空时使用品类默认值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,
    pub quantity: Quantity,
}

impl StorageItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: CommodityCategory,
        base_shelf_life_days: u32,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            base_shelf_life_days: f64::from(base_shelf_life_days),
            sensitivity: None,
            quantity,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    /// 实际使用的敏感系数
    pub fn effective_sensitivity(&self, category_default: Sensitivity) -> Sensitivity {
        self.sensitivity.unwrap_or(category_default)
    }

    /// 基础保质期天数，必须是正整数
    pub fn base_days(&self) -> Result<u32, ShelfLifeError> {
        let days = self.base_shelf_life_days;
        if !days.is_finite() || days <= 0.0 {
            return Err(ShelfLifeError::invalid_item(
                &self.id,
                format!("base shelf life must be positive, got {}", days),
            ));
        }
        if days.fract() != 0.0 || days > f64::from(u32::MAX) {
            return Err(ShelfLifeError::invalid_item(
                &self.id,
                format!("base shelf life must be a whole number of days, got {}", days),
            ));
        }
        Ok(days as u32)
    }

    /// 校验保质期和自带系数
    pub fn validate(&self) -> Result<(), ShelfLifeError> {
        self.base_days()?;

        if let Some(sensitivity) = &self.sensitivity {
            sensitivity
                .check()
                .map_err(|reason| ShelfLifeError::invalid_item(&self.id, reason))?;
        }

        Ok(())
    }
}

impl Entity for StorageItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use granary_domain_core::Unit;

    fn rice() -> StorageItem {
        StorageItem::new(
            "ITEM-001",
            "Basmati Rice",
            CommodityCategory::Grain,
            180,
            Quantity::new(1200.0, Unit::kilogram()),
        )
    }

    #[test]
    fn test_valid_item() {
        assert!(rice().validate().is_ok());
        assert_eq!(rice().id().as_str(), "ITEM-001");
    }

    #[test]
    fn test_zero_baseline_is_invalid() {
        let mut item = rice();
        item.base_shelf_life_days = 0.0;
        let err = item.validate().unwrap_err();
        assert_eq!(err.item_id().as_str(), "ITEM-001");
        assert!(err.to_string().contains("base shelf life"));
    }

    #[test]
    fn test_malformed_baselines_are_invalid() {
        for days in [-5.0, 7.5, f64::NAN, f64::INFINITY, 1.0e12] {
            let mut item = rice();
            item.base_shelf_life_days = days;
            assert!(
                matches!(item.base_days(), Err(ShelfLifeError::InvalidItemData { .. })),
                "baseline {}",
                days
            );
        }

        assert_eq!(rice().base_days(), Ok(180));
    }

    #[test]
    fn test_negative_sensitivity_is_invalid() {
        let item = rice().with_sensitivity(Sensitivity::new(1.0, -0.5));
        assert!(matches!(
            item.validate(),
            Err(ShelfLifeError::InvalidItemData { .. })
        ));
    }

    #[test]
    fn test_effective_sensitivity() {
        let default = Sensitivity::new(2.0, 3.0);
        assert_eq!(rice().effective_sensitivity(default), default);

        let own = Sensitivity::new(0.5, 0.5);
        assert_eq!(rice().with_sensitivity(own).effective_sensitivity(default), own);
    }

    #[test]
    fn test_deserialize_from_catalog_json() {
        let json = r#"{
            "id": "ITEM-007",
            "name": "Fresh Milk",
            "category": "dairy",
            "baseShelfLifeDays": 7,
            "quantity": { "value": 300, "unit": "L" }
        }"#;
        let item: StorageItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, CommodityCategory::Dairy);
        assert!(item.sensitivity.is_none());
        assert_eq!(item.quantity.unit, Unit::liter());
        assert_eq!(item.base_days(), Ok(7));
    }

    #[test]
    fn test_negative_baseline_still_deserializes() {
        let json = r#"{
            "id": "ITEM-008",
            "name": "Curd",
            "category": "dairy",
            "baseShelfLifeDays": -5,
            "quantity": { "value": 40, "unit": "KG" }
        }"#;
        let item: StorageItem = serde_json::from_str(json).unwrap();
        assert!(item.validate().is_err());
    }
}
