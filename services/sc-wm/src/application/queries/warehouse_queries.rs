//! 仓库保质期评估查询

use granary_cqrs_core::Query;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EnvironmentReading, ForecastDay, WarehouseId};
use crate::domain::views::{ItemFailure, RiskSummary, SpoilagePrediction, WarehouseAlert};

/// 评估整个仓库的保质期风险
#[derive(Debug, Clone)]
pub struct AssessWarehouseQuery {
    pub warehouse_id: WarehouseId,
}

impl AssessWarehouseQuery {
    pub fn new(warehouse_id: impl Into<WarehouseId>) -> Self {
        Self {
            warehouse_id: warehouse_id.into(),
        }
    }
}

impl Query for AssessWarehouseQuery {
    type Result = WarehouseAssessment;
}

/// 本次评估使用的环境读数来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReadingSource {
    /// 仓内传感器平均值
    #[serde(rename_all = "camelCase")]
    Sensors { sample_count: usize },
    /// 传感器无数据，使用天气服务的当前读数
    Weather,
}

/// 仓库评估结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseAssessment {
    pub warehouse_id: WarehouseId,
    pub reading: EnvironmentReading,
    pub reading_source: ReadingSource,
    pub forecast: Vec<ForecastDay>,
    pub predictions: Vec<SpoilagePrediction>,
    pub failures: Vec<ItemFailure>,
    pub alerts: Vec<WarehouseAlert>,
    pub summary: RiskSummary,
}
