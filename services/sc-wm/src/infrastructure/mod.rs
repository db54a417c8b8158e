//! 基础设施层
//!
//! 外部协作方的内存实现和可观测性

pub mod catalog;
pub mod observability;
pub mod snapshot;

pub use catalog::StaticCatalog;
pub use snapshot::{SnapshotWeatherProvider, StaticSensorFeed, WarehouseSnapshot};
