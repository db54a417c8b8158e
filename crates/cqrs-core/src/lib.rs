//! granary-cqrs-core - CQRS 核心库
//!
//! 只读用例的 Query / QueryHandler 抽象

mod query;

pub use query::*;
