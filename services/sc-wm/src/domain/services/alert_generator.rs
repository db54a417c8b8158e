//! 仓库告警生成

use granary_domain_core::Quantity;

use crate::domain::enums::{AlertKind, AlertSeverity, CommodityCategory, RiskLevel};
use crate::domain::policy::{Excursion, OperatingLimit, SafeOperatingLimits};
use crate::domain::value_objects::{EnvironmentReading, ItemId, WarehouseId};
use crate::domain::views::{SpoilagePrediction, WarehouseAlert};

/// 生成告警列表
///
/// 1. 温度、湿度各自越过安全区间时生成环境告警
/// 2. 每个存在 high/critical 批次的品类生成一条库存告警
/// 3. 稳定排序：critical 在前，同级按涉及批次数降序
///
/// 无越界且无高风险批次时返回空列表
pub fn generate_alerts(
    limits: &SafeOperatingLimits,
    warehouse_id: &WarehouseId,
    reading: &EnvironmentReading,
    predictions: &[SpoilagePrediction],
) -> Vec<WarehouseAlert> {
    let mut alerts = Vec::new();

    let conditions = [
        (AlertKind::Temperature, &limits.temperature, reading.temperature, "°C"),
        (AlertKind::Humidity, &limits.humidity, reading.humidity, "%"),
    ];
    for (kind, limit, value, unit) in conditions {
        if let Some(excursion) = limit.classify(value) {
            alerts.push(condition_alert(warehouse_id, kind, limit, value, unit, excursion));
        }
    }

    alerts.extend(
        group_at_risk(predictions)
            .into_iter()
            .map(|group| group.into_alert(warehouse_id)),
    );

    alerts.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.related_item_ids.len().cmp(&a.related_item_ids.len()))
    });

    alerts
}

fn condition_alert(
    warehouse_id: &WarehouseId,
    kind: AlertKind,
    limit: &OperatingLimit,
    value: f64,
    unit: &str,
    excursion: Excursion,
) -> WarehouseAlert {
    let direction = if excursion.signed_distance < 0.0 {
        "below"
    } else {
        "above"
    };

    let message = format!(
        "Warehouse {} {} {:.1}{} is {:.1}{} {} the safe operating range ({:.1}{} to {:.1}{})",
        warehouse_id,
        kind.as_str(),
        value,
        unit,
        excursion.signed_distance.abs(),
        unit,
        direction,
        limit.band.min,
        unit,
        limit.band.max,
        unit,
    );

    WarehouseAlert {
        warehouse_id: warehouse_id.clone(),
        kind,
        severity: excursion.severity,
        category: None,
        message,
        related_item_ids: Vec::new(),
    }
}

/// 单个品类的高风险批次
struct AtRiskGroup {
    category: CommodityCategory,
    worst: RiskLevel,
    item_ids: Vec<ItemId>,
    /// 单位不一致时为 None
    quantity: Option<Quantity>,
}

impl AtRiskGroup {
    fn into_alert(self, warehouse_id: &WarehouseId) -> WarehouseAlert {
        let severity = if self.worst == RiskLevel::Critical {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };

        let ids = self
            .item_ids
            .iter()
            .map(ItemId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let mut message = format!(
            "{} {} item(s) at {} spoilage risk in warehouse {}: {}",
            self.item_ids.len(),
            self.category,
            self.worst,
            warehouse_id,
            ids,
        );
        if let Some(quantity) = &self.quantity {
            message.push_str(&format!(" ({} affected)", quantity));
        }

        WarehouseAlert {
            warehouse_id: warehouse_id.clone(),
            kind: AlertKind::Inventory,
            severity,
            category: Some(self.category),
            message,
            related_item_ids: self.item_ids,
        }
    }
}

/// 按品类分组高风险批次，保持品类首次出现的顺序
fn group_at_risk(predictions: &[SpoilagePrediction]) -> Vec<AtRiskGroup> {
    let mut groups: Vec<AtRiskGroup> = Vec::new();

    for prediction in predictions.iter().filter(|p| p.risk_level.is_at_risk()) {
        match groups.iter_mut().find(|g| g.category == prediction.category) {
            Some(group) => {
                group.worst = group.worst.max(prediction.risk_level);
                group.item_ids.push(prediction.item_id.clone());
                group.quantity = group
                    .quantity
                    .take()
                    .and_then(|q| q.checked_add(&prediction.quantity));
            }
            None => groups.push(AtRiskGroup {
                category: prediction.category,
                worst: prediction.risk_level,
                item_ids: vec![prediction.item_id.clone()],
                quantity: Some(prediction.quantity.clone()),
            }),
        }
    }

    groups
}
