//! 风险等级

use serde::{Deserialize, Serialize};
use std::fmt;

/// 剩余保质期风险等级
///
/// 声明顺序即严重程度顺序，`Ord` 比较结果 Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// 剩余比例 <= 该值为 Critical
pub const CRITICAL_RATIO: f64 = 0.10;
/// 剩余比例 <= 该值为 High
pub const HIGH_RATIO: f64 = 0.30;
/// 剩余比例 <= 该值为 Medium
pub const MEDIUM_RATIO: f64 = 0.60;

impl RiskLevel {
    /// 根据剩余比例分级，边界值归入更严重的等级
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= CRITICAL_RATIO {
            Self::Critical
        } else if ratio <= HIGH_RATIO {
            Self::High
        } else if ratio <= MEDIUM_RATIO {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// 根据当前/原始保质期天数分级
    ///
    /// `original` 为 0 时视为已耗尽
    pub fn from_shelf_life(current: u32, original: u32) -> Self {
        if original == 0 {
            return Self::Critical;
        }
        Self::from_ratio(f64::from(current) / f64::from(original))
    }

    /// 是否需要生成库存告警
    pub fn is_at_risk(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// 建议表行号
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
