//! sc-wm - 仓储保质期风险引擎
//!
//! 结合品类储存参数、仓内温湿度和短期天气预报，
//! 计算每个批次的剩余保质期、风险等级和处置建议，并生成仓库告警

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
