//! 枚举模块

mod alert_kind;
mod alert_severity;
mod commodity_category;
mod risk_level;

pub use alert_kind::AlertKind;
pub use alert_severity::AlertSeverity;
pub use commodity_category::CommodityCategory;
pub use risk_level::RiskLevel;
