//! 外部协作方接口
//!
//! 库存目录、天气服务和传感器网关均在引擎之外，这里只定义接口

mod inventory_repository;
mod sensor_feed;
mod weather_provider;

pub use inventory_repository::InventoryRepository;
pub use sensor_feed::SensorFeed;
pub use weather_provider::{WeatherProvider, WeatherReport};

#[cfg(test)]
pub use inventory_repository::MockInventoryRepository;
#[cfg(test)]
pub use sensor_feed::MockSensorFeed;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
