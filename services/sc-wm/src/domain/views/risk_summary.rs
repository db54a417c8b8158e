//! 风险等级汇总

use serde::{Deserialize, Serialize};

use crate::domain::enums::RiskLevel;

use super::SpoilagePrediction;

/// 各风险等级的批次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskSummary {
    pub fn from_predictions(predictions: &[SpoilagePrediction]) -> Self {
        predictions.iter().fold(Self::default(), |mut summary, p| {
            summary.total += 1;
            match p.risk_level {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Critical => summary.critical += 1,
            }
            summary
        })
    }

    /// 高风险及以上的批次数
    pub fn at_risk(&self) -> usize {
        self.high + self.critical
    }
}
