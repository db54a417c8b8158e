//! sc-wm - 仓库保质期风险评估
//!
//! 用法：`sc-wm <warehouse-id> [catalog.json] [snapshot.json]`
//!
//! 未指定文件时使用内置演示数据，评估结果以 JSON 输出到 stdout

use std::sync::Arc;

use anyhow::Context;
use granary_cqrs_core::QueryHandler;
use sc_wm::application::{AssessWarehouseHandler, AssessWarehouseQuery};
use sc_wm::config::ServiceConfig;
use sc_wm::domain::ShelfLifeEngine;
use sc_wm::domain::value_objects::WarehouseId;
use sc_wm::infrastructure::{
    SnapshotWeatherProvider, StaticCatalog, StaticSensorFeed, WarehouseSnapshot,
};
use tracing::{debug, info};

const USAGE: &str = "usage: sc-wm <warehouse-id> [catalog.json] [snapshot.json]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_dir = std::env::var("SC_WM_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = ServiceConfig::load(&config_dir).context("failed to load configuration")?;

    granary_telemetry::init_from_config(&config.app.telemetry);
    let metrics = granary_telemetry::init_metrics().context("failed to install metrics recorder")?;

    let mut args = std::env::args().skip(1);
    let warehouse_id = args.next().map(WarehouseId::new).context(USAGE)?;

    let catalog = match args.next() {
        Some(path) => StaticCatalog::from_json_file(&path).await?,
        None => StaticCatalog::seeded(),
    };
    let snapshots = match args.next() {
        Some(path) => WarehouseSnapshot::load_all(&path).await?,
        None => WarehouseSnapshot::demo(),
    };

    info!(
        app = %config.app.app_name,
        env = %config.app.app_env,
        warehouse_id = %warehouse_id,
        "Starting shelf-life assessment"
    );

    let engine = ShelfLifeEngine::new(config.engine)?;
    let handler = AssessWarehouseHandler::new(
        Arc::new(engine),
        Arc::new(catalog),
        Arc::new(SnapshotWeatherProvider::from_snapshots(&snapshots)),
        Arc::new(StaticSensorFeed::from_snapshots(&snapshots)),
    );

    let assessment = handler
        .handle(AssessWarehouseQuery::new(warehouse_id))
        .await?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    debug!(metrics = %metrics.render(), "Metrics snapshot");

    Ok(())
}
