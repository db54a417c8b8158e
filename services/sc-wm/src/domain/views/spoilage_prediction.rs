//! 单批次保质期预测

use granary_domain_core::Quantity;
use serde::{Deserialize, Serialize};

use crate::domain::enums::{CommodityCategory, RiskLevel};
use crate::domain::value_objects::ItemId;

/// 影响保质期的因素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AffectedFactors {
    pub temperature: bool,
    pub humidity: bool,
    pub weather: bool,
}

impl AffectedFactors {
    /// 建议表列号：温度 1、湿度 2、天气 4 按位组合
    pub(crate) fn index(&self) -> usize {
        usize::from(self.temperature) | usize::from(self.humidity) << 1 | usize::from(self.weather) << 2
    }
}

/// 各因素扣减的天数（取整前）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionBreakdown {
    pub temperature_days: f64,
    pub humidity_days: f64,
    pub weather_days: f64,
}

impl ReductionBreakdown {
    pub fn total(&self) -> f64 {
        self.temperature_days + self.humidity_days + self.weather_days
    }

    pub fn factors(&self) -> AffectedFactors {
        AffectedFactors {
            temperature: self.temperature_days > 0.0,
            humidity: self.humidity_days > 0.0,
            weather: self.weather_days > 0.0,
        }
    }
}

/// 保质期预测结果
///
/// 不变式：`current_shelf_life <= original_shelf_life`，
/// `risk_level` 由两者比值唯一确定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoilagePrediction {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: CommodityCategory,
    pub quantity: Quantity,
    pub original_shelf_life: u32,
    pub current_shelf_life: u32,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub affected_by_temperature: bool,
    pub affected_by_humidity: bool,
    pub affected_by_weather: bool,
    pub breakdown: ReductionBreakdown,
}

impl SpoilagePrediction {
    /// 剩余保质期比例
    pub fn remaining_ratio(&self) -> f64 {
        if self.original_shelf_life == 0 {
            return 0.0;
        }
        f64::from(self.current_shelf_life) / f64::from(self.original_shelf_life)
    }
}
