//! 环境读数

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 仓库当前温湿度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    /// 温度（°C）
    pub temperature: f64,
    /// 相对湿度（%）
    pub humidity: f64,
}

impl EnvironmentReading {
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// 对实时传感器样本求平均
    ///
    /// 只使用 [`SensorSample::is_valid`] 的样本；没有有效样本时返回 None
    pub fn from_samples(samples: &[SensorSample]) -> Option<Self> {
        let (temperature, humidity, count) = samples
            .iter()
            .filter(|s| s.is_valid())
            .fold((0.0, 0.0, 0u32), |(t, h, n), s| {
                (t + s.temperature, h + s.humidity, n + 1)
            });
        (count > 0).then(|| {
            let count = f64::from(count);
            Self::new(temperature / count, humidity / count)
        })
    }
}

/// 单个传感器上报样本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSample {
    pub sensor_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub recorded_at: DateTime<Utc>,
}

impl SensorSample {
    /// 温度和湿度都是有限值
    pub fn is_valid(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}
