//! 天气预报

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Band;

/// 单日天气预报
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// 最低温度（°C）
    pub min_temperature: f64,
    /// 最高温度（°C）
    pub max_temperature: f64,
    /// 相对湿度（%）
    pub humidity: f64,
    /// 天气描述，仅用于展示
    #[serde(default)]
    pub condition: String,
}

impl ForecastDay {
    /// 当日最低/最高温度中偏离较大者
    pub fn temperature_deviation(&self, ideal: &Band) -> f64 {
        ideal
            .deviation(self.min_temperature)
            .max(ideal.deviation(self.max_temperature))
    }

    pub fn humidity_deviation(&self, ideal: &Band) -> f64 {
        ideal.deviation(self.humidity)
    }
}
