//! 领域层
//!
//! 包含实体、值对象、输出视图、枚举、引擎参数、领域服务和外部协作方接口

pub mod entities;
pub mod enums;
pub mod errors;
pub mod policy;
pub mod repositories;
pub mod services;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use enums::*;
pub use errors::*;
pub use policy::*;
pub use repositories::*;
pub use services::ShelfLifeEngine;
pub use value_objects::*;
pub use views::*;
