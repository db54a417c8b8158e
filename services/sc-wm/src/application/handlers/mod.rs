//! 查询处理器

mod assess_warehouse_handler;

pub use assess_warehouse_handler::AssessWarehouseHandler;
