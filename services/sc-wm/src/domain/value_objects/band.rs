//! 数值区间值对象

use serde::{Deserialize, Serialize};

/// 闭区间 `[min, max]`
///
/// 用于品类理想温湿度区间和仓库安全运行区间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 区间是否合法（有限且 min <= max）
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// 到最近区间边界的距离，区间内为 0
    ///
    /// NaN 读数不可比较，同样返回 0
    pub fn deviation(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }

    /// 带方向的偏离：低于下限为负，高于上限为正
    pub fn signed_deviation(&self, value: f64) -> f64 {
        if value < self.min {
            value - self.min
        } else {
            self.deviation(value)
        }
    }
}
