//! 实体模块

mod storage_item;

pub use storage_item::StorageItem;
