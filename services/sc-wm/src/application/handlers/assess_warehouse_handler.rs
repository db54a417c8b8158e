//! 仓库保质期评估处理器

use std::sync::Arc;

use async_trait::async_trait;
use granary_cqrs_core::QueryHandler;
use granary_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::application::queries::{AssessWarehouseQuery, ReadingSource, WarehouseAssessment};
use crate::domain::repositories::{InventoryRepository, SensorFeed, WeatherProvider};
use crate::domain::services::ShelfLifeEngine;
use crate::domain::value_objects::{EnvironmentReading, WarehouseId};
use crate::domain::views::RiskSummary;
use crate::infrastructure::observability::metrics;

/// 仓库保质期评估处理器
///
/// 从外部协作方取数，调用引擎计算预测和告警
pub struct AssessWarehouseHandler {
    engine: Arc<ShelfLifeEngine>,
    inventory: Arc<dyn InventoryRepository>,
    weather: Arc<dyn WeatherProvider>,
    sensors: Arc<dyn SensorFeed>,
}

impl AssessWarehouseHandler {
    pub fn new(
        engine: Arc<ShelfLifeEngine>,
        inventory: Arc<dyn InventoryRepository>,
        weather: Arc<dyn WeatherProvider>,
        sensors: Arc<dyn SensorFeed>,
    ) -> Self {
        Self {
            engine,
            inventory,
            weather,
            sensors,
        }
    }

    /// 优先使用传感器平均值；传感器不可用或无有效样本时退回天气读数
    async fn resolve_reading(
        &self,
        warehouse_id: &WarehouseId,
        fallback: EnvironmentReading,
    ) -> (EnvironmentReading, ReadingSource) {
        match self.sensors.recent_samples(warehouse_id).await {
            Ok(samples) => match EnvironmentReading::from_samples(&samples) {
                Some(reading) => (
                    reading,
                    ReadingSource::Sensors {
                        sample_count: samples.iter().filter(|s| s.is_valid()).count(),
                    },
                ),
                None => (fallback, ReadingSource::Weather),
            },
            Err(e) => {
                warn!(
                    warehouse_id = %warehouse_id,
                    error = %e,
                    "Sensor feed unavailable, using weather reading"
                );
                (fallback, ReadingSource::Weather)
            }
        }
    }
}

#[async_trait]
impl QueryHandler<AssessWarehouseQuery> for AssessWarehouseHandler {
    async fn handle(&self, query: AssessWarehouseQuery) -> AppResult<WarehouseAssessment> {
        let warehouse_id = query.warehouse_id;
        info!(warehouse_id = %warehouse_id, "Handling AssessWarehouseQuery");

        let report = self.weather.report(&warehouse_id).await?.ok_or_else(|| {
            AppError::not_found(format!("No weather data for warehouse {}", warehouse_id))
        })?;

        let (reading, reading_source) = self.resolve_reading(&warehouse_id, report.current).await;
        let items = self.inventory.find_by_warehouse(&warehouse_id).await?;

        let batch = self.engine.predict_batch(&items, &reading, &report.forecast);
        let alerts = self
            .engine
            .generate_alerts(&warehouse_id, &reading, &batch.predictions);
        let summary = RiskSummary::from_predictions(&batch.predictions);

        metrics::record_assessment(&batch, &alerts);

        info!(
            warehouse_id = %warehouse_id,
            items = items.len(),
            failures = batch.failures.len(),
            at_risk = summary.at_risk(),
            alerts = alerts.len(),
            "Warehouse assessment completed"
        );

        Ok(WarehouseAssessment {
            warehouse_id,
            reading,
            reading_source,
            forecast: report.forecast,
            predictions: batch.predictions,
            failures: batch.failures,
            alerts,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StorageItem;
    use crate::domain::enums::{AlertSeverity, CommodityCategory, RiskLevel};
    use crate::domain::repositories::{
        MockInventoryRepository, MockSensorFeed, MockWeatherProvider, WeatherReport,
    };
    use crate::domain::value_objects::SensorSample;
    use chrono::Utc;
    use granary_domain_core::{Quantity, Unit};

    fn items() -> Vec<StorageItem> {
        vec![
            StorageItem::new(
                "ITEM-RICE",
                "Rice",
                CommodityCategory::Grain,
                180,
                Quantity::new(2.0, Unit::tonne()),
            ),
            StorageItem::new(
                "ITEM-MILK",
                "Milk",
                CommodityCategory::Dairy,
                7,
                Quantity::new(300.0, Unit::liter()),
            ),
            StorageItem::new(
                "ITEM-BAD",
                "Unknown",
                CommodityCategory::Other,
                0,
                Quantity::new(1.0, Unit::crate_box()),
            ),
        ]
    }

    fn weather(current: EnvironmentReading) -> MockWeatherProvider {
        let mut weather = MockWeatherProvider::new();
        weather.expect_report().returning(move |_| {
            Ok(Some(WeatherReport {
                current,
                forecast: vec![],
            }))
        });
        weather
    }

    fn inventory() -> MockInventoryRepository {
        let mut inventory = MockInventoryRepository::new();
        inventory
            .expect_find_by_warehouse()
            .returning(|_| Ok(items()));
        inventory
    }

    fn handler(
        inventory: MockInventoryRepository,
        weather: MockWeatherProvider,
        sensors: MockSensorFeed,
    ) -> AssessWarehouseHandler {
        AssessWarehouseHandler::new(
            Arc::new(ShelfLifeEngine::default()),
            Arc::new(inventory),
            Arc::new(weather),
            Arc::new(sensors),
        )
    }

    #[tokio::test]
    async fn test_sensor_average_is_preferred() {
        let mut sensors = MockSensorFeed::new();
        sensors.expect_recent_samples().returning(|_| {
            Ok(vec![
                SensorSample {
                    sensor_id: "S-1".to_string(),
                    temperature: 14.0,
                    humidity: 58.0,
                    recorded_at: Utc::now(),
                },
                SensorSample {
                    sensor_id: "S-2".to_string(),
                    temperature: 16.0,
                    humidity: 62.0,
                    recorded_at: Utc::now(),
                },
            ])
        });

        let handler = handler(
            inventory(),
            weather(EnvironmentReading::new(38.0, 90.0)),
            sensors,
        );
        let assessment = handler
            .handle(AssessWarehouseQuery::new("W01"))
            .await
            .unwrap();

        assert_eq!(assessment.reading, EnvironmentReading::new(15.0, 60.0));
        assert_eq!(assessment.reading_source, ReadingSource::Sensors { sample_count: 2 });
        assert!(assessment.alerts.iter().all(|a| !a.kind.is_condition()));
    }

    #[tokio::test]
    async fn test_sample_count_excludes_dropped_samples() {
        let sample = |sensor_id: &str, temperature: f64, humidity: f64| SensorSample {
            sensor_id: sensor_id.to_string(),
            temperature,
            humidity,
            recorded_at: Utc::now(),
        };
        let mut sensors = MockSensorFeed::new();
        sensors.expect_recent_samples().returning(move |_| {
            Ok(vec![
                sample("S-1", 14.0, 58.0),
                sample("S-2", f64::NAN, 60.0),
                sample("S-3", 16.0, 62.0),
            ])
        });

        let handler = handler(
            inventory(),
            weather(EnvironmentReading::new(38.0, 90.0)),
            sensors,
        );
        let assessment = handler
            .handle(AssessWarehouseQuery::new("W01"))
            .await
            .unwrap();

        assert_eq!(assessment.reading, EnvironmentReading::new(15.0, 60.0));
        assert_eq!(assessment.reading_source, ReadingSource::Sensors { sample_count: 2 });
    }

    #[tokio::test]
    async fn test_falls_back_to_weather_and_isolates_invalid_items() {
        let mut sensors = MockSensorFeed::new();
        sensors
            .expect_recent_samples()
            .returning(|_| Err(AppError::external_service("gateway timeout")));

        let handler = handler(
            inventory(),
            weather(EnvironmentReading::new(40.0, 90.0)),
            sensors,
        );
        let assessment = handler
            .handle(AssessWarehouseQuery::new("W01"))
            .await
            .unwrap();

        assert_eq!(assessment.reading_source, ReadingSource::Weather);
        assert_eq!(assessment.predictions.len(), 2);
        assert_eq!(assessment.failures.len(), 1);
        assert_eq!(assessment.failures[0].item_id.as_str(), "ITEM-BAD");
        assert_eq!(assessment.summary.total, 2);

        // 牛奶在 40°C 下已耗尽，排在最前
        assert_eq!(assessment.predictions[0].item_id.as_str(), "ITEM-MILK");
        assert_eq!(assessment.predictions[0].risk_level, RiskLevel::Critical);

        assert!(
            assessment
                .alerts
                .iter()
                .all(|a| a.severity == AlertSeverity::Critical)
        );
        assert!(assessment.alerts.len() >= 3);
    }

    #[tokio::test]
    async fn test_unknown_warehouse_is_not_found() {
        let mut weather = MockWeatherProvider::new();
        weather.expect_report().returning(|_| Ok(None));

        let handler = handler(
            MockInventoryRepository::new(),
            weather,
            MockSensorFeed::new(),
        );
        let result = handler.handle(AssessWarehouseQuery::new("W99")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
