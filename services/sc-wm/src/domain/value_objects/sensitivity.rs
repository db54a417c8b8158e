//! 敏感系数值对象

use serde::{Deserialize, Serialize};

/// 保质期敏感系数
///
/// 每偏离理想区间 1 个单位（°C 或 %RH）损失的天数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub temperature: f64,
    pub humidity: f64,
}

impl Sensitivity {
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// 校验系数，返回第一个不合法项的描述
    pub fn check(&self) -> Result<(), String> {
        for (name, value) in [("temperature", self.temperature), ("humidity", self.humidity)] {
            if !value.is_finite() {
                return Err(format!("{} sensitivity must be finite, got {}", name, value));
            }
            if value < 0.0 {
                return Err(format!("{} sensitivity must not be negative, got {}", name, value));
            }
        }
        Ok(())
    }
}
