//! 天气与传感器快照
//!
//! 替代外部天气 API 和传感器网关：使用已解析好的快照数据

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use granary_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::repositories::{SensorFeed, WeatherProvider, WeatherReport};
use crate::domain::value_objects::{EnvironmentReading, ForecastDay, SensorSample, WarehouseId};

/// 单个仓库的环境快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseSnapshot {
    pub warehouse_id: WarehouseId,
    pub current: EnvironmentReading,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    #[serde(default)]
    pub sensors: Vec<SensorSample>,
}

impl WarehouseSnapshot {
    /// 从 JSON 文件加载快照列表
    pub async fn load_all(path: impl AsRef<Path>) -> AppResult<Vec<Self>> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::configuration(format!("Failed to read snapshot {}: {}", path.display(), e))
        })?;
        let snapshots: Vec<Self> = serde_json::from_str(&content).map_err(|e| {
            AppError::validation(format!("Invalid snapshot {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), warehouses = snapshots.len(), "Environment snapshot loaded");
        Ok(snapshots)
    }

    /// 演示用快照，预报从今天开始
    pub fn demo() -> Vec<Self> {
        Self::demo_from(Utc::now().date_naive())
    }

    pub fn demo_from(today: NaiveDate) -> Vec<Self> {
        let day = |offset: u64, min: f64, max: f64, humidity: f64, condition: &str| ForecastDay {
            date: today + Days::new(offset),
            min_temperature: min,
            max_temperature: max,
            humidity,
            condition: condition.to_string(),
        };
        let now = Utc::now();
        let sample = |sensor_id: &str, temperature: f64, humidity: f64| SensorSample {
            sensor_id: sensor_id.to_string(),
            temperature,
            humidity,
            recorded_at: now,
        };

        vec![
            Self {
                warehouse_id: WarehouseId::new("W01"),
                current: EnvironmentReading::new(31.0, 72.0),
                forecast: vec![
                    day(1, 26.0, 34.0, 80.0, "Humid"),
                    day(2, 25.0, 33.0, 88.0, "Thunderstorms"),
                    day(3, 24.0, 31.0, 75.0, "Cloudy"),
                ],
                sensors: Vec::new(),
            },
            Self {
                warehouse_id: WarehouseId::new("W02"),
                current: EnvironmentReading::new(22.0, 60.0),
                forecast: vec![
                    day(1, 18.0, 27.0, 55.0, "Sunny"),
                    day(2, 19.0, 29.0, 50.0, "Sunny"),
                ],
                sensors: vec![
                    sample("W02-COLD-A", 3.5, 86.0),
                    sample("W02-COLD-B", 4.5, 84.0),
                ],
            },
        ]
    }
}

/// 基于快照的天气服务
#[derive(Debug, Clone, Default)]
pub struct SnapshotWeatherProvider {
    reports: HashMap<WarehouseId, WeatherReport>,
}

impl SnapshotWeatherProvider {
    pub fn from_snapshots(snapshots: &[WarehouseSnapshot]) -> Self {
        let reports = snapshots
            .iter()
            .map(|s| {
                (
                    s.warehouse_id.clone(),
                    WeatherReport {
                        current: s.current,
                        forecast: s.forecast.clone(),
                    },
                )
            })
            .collect();
        Self { reports }
    }
}

#[async_trait]
impl WeatherProvider for SnapshotWeatherProvider {
    async fn report(&self, warehouse_id: &WarehouseId) -> AppResult<Option<WeatherReport>> {
        Ok(self.reports.get(warehouse_id).cloned())
    }
}

/// 基于快照的传感器数据
#[derive(Debug, Clone, Default)]
pub struct StaticSensorFeed {
    samples: HashMap<WarehouseId, Vec<SensorSample>>,
}

impl StaticSensorFeed {
    pub fn from_snapshots(snapshots: &[WarehouseSnapshot]) -> Self {
        let samples = snapshots
            .iter()
            .filter(|s| !s.sensors.is_empty())
            .map(|s| (s.warehouse_id.clone(), s.sensors.clone()))
            .collect();
        Self { samples }
    }
}

#[async_trait]
impl SensorFeed for StaticSensorFeed {
    async fn recent_samples(&self, warehouse_id: &WarehouseId) -> AppResult<Vec<SensorSample>> {
        Ok(self.samples.get(warehouse_id).cloned().unwrap_or_default())
    }
}
