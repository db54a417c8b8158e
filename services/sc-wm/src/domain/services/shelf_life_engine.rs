//! 保质期风险引擎
//!
//! 纯计算，无 I/O，可在多个仓库间并发调用

use granary_errors::{AppError, AppResult};
use tracing::{debug, warn};

use crate::domain::entities::StorageItem;
use crate::domain::enums::RiskLevel;
use crate::domain::errors::ShelfLifeError;
use crate::domain::policy::{CategoryProfile, EngineSettings};
use crate::domain::value_objects::{
    EnvironmentReading, ForecastDay, Sensitivity, WarehouseId,
};
use crate::domain::views::{
    BatchPrediction, ItemFailure, ReductionBreakdown, SpoilagePrediction, WarehouseAlert,
};

use super::{alert_generator, recommendation};

/// 保质期风险引擎
#[derive(Debug, Clone, Default)]
pub struct ShelfLifeEngine {
    settings: EngineSettings,
}

impl ShelfLifeEngine {
    /// 校验参数后创建引擎，`weather_weight` 须在 [0, 1] 内
    pub fn new(settings: EngineSettings) -> AppResult<Self> {
        settings
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid engine settings: {}", e)))?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// 预测单个批次在当前环境和预报下的剩余保质期
    ///
    /// 只有批次数据非法时返回错误；极端或无效读数通过截断处理
    pub fn predict_shelf_life_impact(
        &self,
        item: &StorageItem,
        reading: &EnvironmentReading,
        forecast: &[ForecastDay],
    ) -> Result<SpoilagePrediction, ShelfLifeError> {
        item.validate()?;
        let original = item.base_days()?;

        let profile = self.settings.profiles.get(item.category);
        let sensitivity = item.effective_sensitivity(profile.sensitivity);

        let temperature_deviation = profile.ideal_temperature.deviation(reading.temperature);
        let humidity_deviation = profile.ideal_humidity.deviation(reading.humidity);

        let breakdown = ReductionBreakdown {
            temperature_days: non_negative(temperature_deviation * sensitivity.temperature),
            humidity_days: non_negative(humidity_deviation * sensitivity.humidity),
            weather_days: self.weather_penalty(
                profile,
                sensitivity,
                temperature_deviation,
                humidity_deviation,
                forecast,
            ),
        };

        let current = remaining_days(original, breakdown.total());
        let risk_level = RiskLevel::from_shelf_life(current, original);
        let factors = breakdown.factors();

        debug!(
            item_id = %item.id,
            category = %item.category,
            original,
            current,
            risk = %risk_level,
            "Shelf life predicted"
        );

        Ok(SpoilagePrediction {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            category: item.category,
            quantity: item.quantity.clone(),
            original_shelf_life: original,
            current_shelf_life: current,
            risk_level,
            recommendation: recommendation::recommend(risk_level, factors).to_string(),
            affected_by_temperature: factors.temperature,
            affected_by_humidity: factors.humidity,
            affected_by_weather: factors.weather,
            breakdown,
        })
    }

    /// 批量预测，单个批次失败不影响其他批次
    pub fn predict_batch(
        &self,
        items: &[StorageItem],
        reading: &EnvironmentReading,
        forecast: &[ForecastDay],
    ) -> BatchPrediction {
        let mut batch = BatchPrediction::default();

        for item in items {
            match self.predict_shelf_life_impact(item, reading, forecast) {
                Ok(prediction) => batch.predictions.push(prediction),
                Err(e) => {
                    warn!(item_id = %item.id, error = %e, "Skipping item with invalid shelf-life data");
                    batch.failures.push(ItemFailure::from(e));
                }
            }
        }

        // 稳定排序：风险高者在前，同级按剩余比例升序
        batch.predictions.sort_by(|a, b| {
            b.risk_level
                .cmp(&a.risk_level)
                .then_with(|| a.remaining_ratio().total_cmp(&b.remaining_ratio()))
        });

        batch
    }

    /// 根据环境读数和预测结果生成仓库告警
    pub fn generate_alerts(
        &self,
        warehouse_id: &WarehouseId,
        reading: &EnvironmentReading,
        predictions: &[SpoilagePrediction],
    ) -> Vec<WarehouseAlert> {
        alert_generator::generate_alerts(
            &self.settings.safe_operating,
            warehouse_id,
            reading,
            predictions,
        )
    }

    /// 天气预警扣减
    ///
    /// 只计算预报比当前读数更差的部分，并按 `weather_weight` 折减
    fn weather_penalty(
        &self,
        profile: &CategoryProfile,
        sensitivity: Sensitivity,
        temperature_deviation: f64,
        humidity_deviation: f64,
        forecast: &[ForecastDay],
    ) -> f64 {
        let (temperature_excess, humidity_excess) = forecast
            .iter()
            .take(self.settings.forecast_horizon_days)
            .fold((0.0_f64, 0.0_f64), |(t, h), day| {
                (
                    t.max(day.temperature_deviation(&profile.ideal_temperature) - temperature_deviation),
                    h.max(day.humidity_deviation(&profile.ideal_humidity) - humidity_deviation),
                )
            });

        non_negative(
            self.settings.weather_weight
                * (non_negative(temperature_excess * sensitivity.temperature)
                    + non_negative(humidity_excess * sensitivity.humidity)),
        )
    }
}

/// 截断为非负，NaN 视为 0
fn non_negative(days: f64) -> f64 {
    if days.is_nan() { 0.0 } else { days.max(0.0) }
}

/// `max(0, round(original - reduction))`，且不超过 original
fn remaining_days(original: u32, reduction: f64) -> u32 {
    let remaining = (f64::from(original) - reduction).round();
    remaining.clamp(0.0, f64::from(original)) as u32
}
