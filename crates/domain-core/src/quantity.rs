//! 数量值对象

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 计量单位
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Unit(pub String);

impl Unit {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn kilogram() -> Self {
        Self("KG".to_string())
    }

    pub fn tonne() -> Self {
        Self("T".to_string())
    }

    pub fn liter() -> Self {
        Self("L".to_string())
    }

    pub fn crate_box() -> Self {
        Self("CRATE".to_string())
    }
}

/// 数量值对象
///
/// 仅用于展示和汇总，不参与保质期计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{value} {unit}")]
pub struct Quantity {
    /// 数量值
    pub value: f64,
    /// 计量单位
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// 同单位相加，单位不同返回 None
    pub fn checked_add(&self, other: &Quantity) -> Option<Quantity> {
        (self.unit == other.unit).then(|| Self::new(self.value + other.value, self.unit.clone()))
    }
}
