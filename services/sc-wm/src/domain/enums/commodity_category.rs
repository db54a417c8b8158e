//! 商品品类

use serde::{Deserialize, Serialize};
use std::fmt;

/// 库存商品品类
///
/// 品类决定理想温湿度区间和默认敏感系数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommodityCategory {
    /// 谷物（稻米、小麦、玉米）
    Grain,
    /// 豆类
    Pulse,
    /// 蔬菜
    Vegetable,
    /// 水果
    Fruit,
    /// 乳制品
    Dairy,
    /// 肉类
    Meat,
    /// 其他，未知品类也归入此类
    #[serde(other)]
    Other,
}

impl CommodityCategory {
    pub const ALL: [CommodityCategory; 7] = [
        Self::Grain,
        Self::Pulse,
        Self::Vegetable,
        Self::Fruit,
        Self::Dairy,
        Self::Meat,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grain => "grain",
            Self::Pulse => "pulse",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CommodityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
