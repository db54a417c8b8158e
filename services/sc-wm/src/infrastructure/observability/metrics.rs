//! sc-wm Metrics
//!
//! 业务指标记录

use metrics::counter;

use crate::domain::views::{BatchPrediction, WarehouseAlert};

// ============================================================================
// 保质期 Metrics
// ============================================================================

/// 记录一次仓库评估的预测、失败批次和告警
pub fn record_assessment(batch: &BatchPrediction, alerts: &[WarehouseAlert]) {
    for prediction in &batch.predictions {
        let labels = [
            ("risk", prediction.risk_level.as_str().to_string()),
            ("category", prediction.category.as_str().to_string()),
        ];
        counter!("shelf_life_predictions_total", &labels).increment(1);
    }

    if !batch.failures.is_empty() {
        counter!("shelf_life_invalid_items_total").increment(batch.failures.len() as u64);
    }

    for alert in alerts {
        let labels = [
            ("severity", alert.severity.as_str().to_string()),
            ("kind", alert.kind.as_str().to_string()),
        ];
        counter!("warehouse_alerts_total", &labels).increment(1);
    }
}
