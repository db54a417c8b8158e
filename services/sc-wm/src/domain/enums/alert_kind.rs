//! 告警类型

use serde::{Deserialize, Serialize};

/// 告警来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// 仓内温度超出安全运行区间
    Temperature,
    /// 仓内湿度超出安全运行区间
    Humidity,
    /// 某品类存在高风险库存
    Inventory,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Inventory => "inventory",
        }
    }

    /// 是否为环境条件告警
    pub fn is_condition(&self) -> bool {
        !matches!(self, Self::Inventory)
    }
}
