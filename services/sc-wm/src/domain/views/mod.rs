//! 引擎输出视图
//!
//! 每次调用重新计算，不持久化

mod batch_prediction;
mod risk_summary;
mod spoilage_prediction;
mod warehouse_alert;

pub use batch_prediction::{BatchPrediction, ItemFailure};
pub use risk_summary::RiskSummary;
pub use spoilage_prediction::{AffectedFactors, ReductionBreakdown, SpoilagePrediction};
pub use warehouse_alert::WarehouseAlert;
