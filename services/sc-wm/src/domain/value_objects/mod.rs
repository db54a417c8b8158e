//! 值对象模块

mod band;
mod environment;
mod forecast;
mod ids;
mod sensitivity;

pub use band::Band;
pub use environment::{EnvironmentReading, SensorSample};
pub use forecast::ForecastDay;
pub use ids::{ItemId, WarehouseId};
pub use sensitivity::Sensitivity;
