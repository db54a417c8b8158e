//! 查询定义

mod warehouse_queries;

pub use warehouse_queries::*;
