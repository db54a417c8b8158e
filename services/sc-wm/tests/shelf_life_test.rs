//! 保质期预测集成测试

use chrono::NaiveDate;
use granary_domain_core::{Quantity, Unit};
use sc_wm::domain::{
    CommodityCategory, EngineSettings, EnvironmentReading, ForecastDay, RiskLevel, Sensitivity,
    ShelfLifeEngine, ShelfLifeError, StorageItem,
};

/// 测试辅助：创建批次
fn item(id: &str, category: CommodityCategory, base_days: u32) -> StorageItem {
    StorageItem::new(id, id, category, base_days, Quantity::new(100.0, Unit::kilogram()))
}

fn forecast_day(day: u32, min: f64, max: f64, humidity: f64) -> ForecastDay {
    ForecastDay {
        date: NaiveDate::from_ymd_opt(2024, 8, day).unwrap(),
        min_temperature: min,
        max_temperature: max,
        humidity,
        condition: "Forecast".to_string(),
    }
}

/// 测试理想条件下保质期不变
#[test]
fn test_in_band_reading_keeps_full_shelf_life() {
    let engine = ShelfLifeEngine::default();
    let rice = item("RICE", CommodityCategory::Grain, 90);

    let prediction = engine
        .predict_shelf_life_impact(&rice, &EnvironmentReading::new(15.0, 60.0), &[])
        .unwrap();

    assert_eq!(prediction.original_shelf_life, 90);
    assert_eq!(prediction.current_shelf_life, 90);
    assert_eq!(prediction.risk_level, RiskLevel::Low);
    assert!(!prediction.affected_by_temperature);
    assert!(!prediction.affected_by_humidity);
    assert!(!prediction.affected_by_weather);
    assert!(prediction.recommendation.contains("optimal"));
}

/// 测试两个维度都严重偏离时保质期耗尽
#[test]
fn test_far_out_of_band_is_critical() {
    let engine = ShelfLifeEngine::default();
    let wheat = item("WHEAT", CommodityCategory::Grain, 10);

    let prediction = engine
        .predict_shelf_life_impact(&wheat, &EnvironmentReading::new(35.0, 90.0), &[])
        .unwrap();

    assert!(prediction.current_shelf_life <= 1);
    assert_eq!(prediction.risk_level, RiskLevel::Critical);
    assert!(prediction.affected_by_temperature);
    assert!(prediction.affected_by_humidity);
    assert!(prediction.recommendation.starts_with("URGENT"));
}

/// 测试风险等级边界：边界值归入更严重的等级
#[test]
fn test_risk_boundaries_through_engine() {
    let engine = ShelfLifeEngine::default();
    // other 品类理想温度上限 25°C，每高出 1°C 扣 1 天
    let crate_item =
        item("CRATE", CommodityCategory::Other, 10).with_sensitivity(Sensitivity::new(1.0, 0.0));

    let cases = [
        (34.0, 1, RiskLevel::Critical),
        (33.0, 2, RiskLevel::High),
        (32.0, 3, RiskLevel::High),
        (31.0, 4, RiskLevel::Medium),
        (29.0, 6, RiskLevel::Medium),
        (28.0, 7, RiskLevel::Low),
    ];

    for (temperature, expected_days, expected_risk) in cases {
        let prediction = engine
            .predict_shelf_life_impact(&crate_item, &EnvironmentReading::new(temperature, 50.0), &[])
            .unwrap();
        assert_eq!(prediction.current_shelf_life, expected_days, "temperature {}", temperature);
        assert_eq!(prediction.risk_level, expected_risk, "temperature {}", temperature);
    }
}

/// 测试任意读数下 0 <= current <= original
#[test]
fn test_current_shelf_life_is_bounded() {
    let engine = ShelfLifeEngine::default();
    let readings = [
        (-273.0, 0.0),
        (-40.0, 5.0),
        (0.0, 50.0),
        (15.0, 60.0),
        (45.0, 100.0),
        (1.0e9, 1.0e9),
        (f64::NAN, 60.0),
        (f64::INFINITY, f64::NEG_INFINITY),
    ];
    let forecast = [forecast_day(1, -10.0, 50.0, 100.0)];
    let no_forecast: [ForecastDay; 0] = [];

    for category in CommodityCategory::ALL {
        let stored = item("ANY", category, 30);
        for (temperature, humidity) in readings {
            for days in [&forecast[..], &no_forecast[..]] {
                let prediction = engine
                    .predict_shelf_life_impact(
                        &stored,
                        &EnvironmentReading::new(temperature, humidity),
                        days,
                    )
                    .unwrap();
                assert!(prediction.current_shelf_life <= prediction.original_shelf_life);
            }
        }
    }
}

/// 测试相同输入得到相同输出
#[test]
fn test_prediction_is_idempotent() {
    let engine = ShelfLifeEngine::default();
    let mango = item("MANGO", CommodityCategory::Fruit, 12);
    let reading = EnvironmentReading::new(18.0, 70.0);
    let forecast = [forecast_day(1, 20.0, 35.0, 90.0), forecast_day(2, 22.0, 36.0, 60.0)];

    let first = engine.predict_shelf_life_impact(&mango, &reading, &forecast).unwrap();
    let second = engine.predict_shelf_life_impact(&mango, &reading, &forecast).unwrap();

    assert_eq!(first, second);
}

/// 测试偏离越大剩余保质期不会增加
#[test]
fn test_shelf_life_is_monotonic_in_deviation() {
    let engine = ShelfLifeEngine::default();
    let forecasts = [vec![], vec![forecast_day(1, 12.0, 30.0, 75.0)]];

    for forecast in &forecasts {
        for category in CommodityCategory::ALL {
            let stored = item("MONO", category, 200);
            let profile = engine.settings().profiles.get(category);
            let ideal_t = profile.ideal_temperature;
            let ideal_h = profile.ideal_humidity;
            let mid_h = (ideal_h.min + ideal_h.max) / 2.0;
            let mid_t = (ideal_t.min + ideal_t.max) / 2.0;

            // 温度向上、向下偏离
            for direction in [1.0, -1.0] {
                let edge = if direction > 0.0 { ideal_t.max } else { ideal_t.min };
                let mut previous = u32::MAX;
                for step in 0..60 {
                    let temperature = edge + direction * f64::from(step) * 0.5;
                    let current = engine
                        .predict_shelf_life_impact(
                            &stored,
                            &EnvironmentReading::new(temperature, mid_h),
                            forecast,
                        )
                        .unwrap()
                        .current_shelf_life;
                    assert!(current <= previous, "{} at {}°C", category, temperature);
                    previous = current;
                }
            }

            // 湿度向上、向下偏离
            for direction in [1.0, -1.0] {
                let edge = if direction > 0.0 { ideal_h.max } else { ideal_h.min };
                let mut previous = u32::MAX;
                for step in 0..60 {
                    let humidity = edge + direction * f64::from(step) * 0.5;
                    let current = engine
                        .predict_shelf_life_impact(
                            &stored,
                            &EnvironmentReading::new(mid_t, humidity),
                            forecast,
                        )
                        .unwrap()
                        .current_shelf_life;
                    assert!(current <= previous, "{} at {}%", category, humidity);
                    previous = current;
                }
            }
        }
    }
}

/// 测试天气预警扣减小于同等当前偏离的扣减
#[test]
fn test_weather_penalty_is_weaker_than_current_reading() {
    let engine = ShelfLifeEngine::default();
    let onions = item("ONION", CommodityCategory::Vegetable, 30);

    let hot_now = engine
        .predict_shelf_life_impact(&onions, &EnvironmentReading::new(20.0, 90.0), &[])
        .unwrap();
    let hot_later = engine
        .predict_shelf_life_impact(
            &onions,
            &EnvironmentReading::new(6.0, 90.0),
            &[forecast_day(1, 6.0, 20.0, 90.0)],
        )
        .unwrap();

    assert!(hot_later.affected_by_weather);
    assert!(!hot_later.affected_by_temperature);
    assert!(hot_later.current_shelf_life > hot_now.current_shelf_life);
}

/// 测试非法批次
#[test]
fn test_invalid_items_are_rejected() {
    let engine = ShelfLifeEngine::default();
    let reading = EnvironmentReading::new(15.0, 60.0);

    let zero = item("ZERO", CommodityCategory::Grain, 0);
    let err = engine.predict_shelf_life_impact(&zero, &reading, &[]).unwrap_err();
    assert_eq!(err.item_id().as_str(), "ZERO");

    let negative =
        item("NEG", CommodityCategory::Grain, 30).with_sensitivity(Sensitivity::new(-1.0, 1.0));
    assert!(matches!(
        engine.predict_shelf_life_impact(&negative, &reading, &[]),
        Err(ShelfLifeError::InvalidItemData { .. })
    ));

    let nan = item("NAN", CommodityCategory::Grain, 30).with_sensitivity(Sensitivity::new(1.0, f64::NAN));
    assert!(engine.predict_shelf_life_impact(&nan, &reading, &[]).is_err());
}

/// 测试批量预测隔离失败批次并按风险排序
#[test]
fn test_batch_isolates_failures_and_orders_by_risk() {
    let engine = ShelfLifeEngine::default();
    let items = vec![
        item("RICE", CommodityCategory::Grain, 180),
        item("BROKEN", CommodityCategory::Grain, 0),
        item("MILK", CommodityCategory::Dairy, 7),
        item("APPLE", CommodityCategory::Fruit, 60),
    ];

    let batch = engine.predict_batch(&items, &EnvironmentReading::new(12.0, 60.0), &[]);

    assert!(!batch.is_complete());
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].item_id.as_str(), "BROKEN");
    assert_eq!(batch.predictions.len(), 3);

    // 牛奶已耗尽 -> critical；苹果扣减约 17 天仍为 low；大米无扣减
    let ids: Vec<_> = batch.predictions.iter().map(|p| p.item_id.as_str()).collect();
    assert_eq!(ids, vec!["MILK", "APPLE", "RICE"]);

    for pair in batch.predictions.windows(2) {
        assert!(pair[0].risk_level >= pair[1].risk_level);
    }
}

/// 测试天气权重超过 1 的参数无法创建引擎
#[test]
fn test_engine_rejects_weather_weight_above_one() {
    let settings = EngineSettings {
        weather_weight: 2.0,
        ..EngineSettings::default()
    };
    assert!(ShelfLifeEngine::new(settings).is_err());

    let settings = EngineSettings {
        weather_weight: 1.0,
        ..EngineSettings::default()
    };
    assert!(ShelfLifeEngine::new(settings).is_ok());
}

/// 测试自定义参数生效
#[test]
fn test_custom_profile_settings() {
    let mut settings = EngineSettings::default();
    settings.profiles.get_mut(CommodityCategory::Grain).sensitivity = Sensitivity::new(10.0, 0.0);
    let engine = ShelfLifeEngine::new(settings).unwrap();

    let prediction = engine
        .predict_shelf_life_impact(
            &item("RICE", CommodityCategory::Grain, 100),
            &EnvironmentReading::new(21.0, 90.0),
            &[],
        )
        .unwrap();

    assert_eq!(prediction.current_shelf_life, 90);
    assert!(prediction.affected_by_temperature);
    assert!(!prediction.affected_by_humidity);
}
