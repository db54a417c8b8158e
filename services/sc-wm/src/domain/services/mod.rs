//! 领域服务

pub mod alert_generator;
pub mod recommendation;
mod shelf_life_engine;

pub use shelf_life_engine::ShelfLifeEngine;
