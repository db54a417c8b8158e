//! 领域错误

use granary_errors::AppError;
use thiserror::Error;

use super::value_objects::ItemId;

/// 保质期计算错误
///
/// 只影响单个批次，批量计算时不会中断其他批次
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShelfLifeError {
    #[error("Invalid item data for {item_id}: {reason}")]
    InvalidItemData { item_id: ItemId, reason: String },
}

impl ShelfLifeError {
    pub fn invalid_item(item_id: &ItemId, reason: impl Into<String>) -> Self {
        Self::InvalidItemData {
            item_id: item_id.clone(),
            reason: reason.into(),
        }
    }

    pub fn item_id(&self) -> &ItemId {
        match self {
            Self::InvalidItemData { item_id, .. } => item_id,
        }
    }
}

impl From<ShelfLifeError> for AppError {
    fn from(err: ShelfLifeError) -> Self {
        AppError::validation(err.to_string())
    }
}
