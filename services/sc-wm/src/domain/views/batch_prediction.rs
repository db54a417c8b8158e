//! 批量预测结果

use serde::{Deserialize, Serialize};

use crate::domain::errors::ShelfLifeError;
use crate::domain::value_objects::ItemId;

use super::SpoilagePrediction;

/// 单个批次的失败原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFailure {
    pub item_id: ItemId,
    pub reason: String,
}

impl From<ShelfLifeError> for ItemFailure {
    fn from(err: ShelfLifeError) -> Self {
        let item_id = err.item_id().clone();
        Self {
            item_id,
            reason: err.to_string(),
        }
    }
}

/// 批量预测：成功的预测与失败的批次分开收集
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchPrediction {
    /// 按风险从高到低、剩余比例从低到高排序
    pub predictions: Vec<SpoilagePrediction>,
    pub failures: Vec<ItemFailure>,
}

impl BatchPrediction {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
