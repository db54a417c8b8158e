//! 引擎参数
//!
//! 品类理想区间、敏感系数、安全运行区间和天气权重都是数据而不是散落的常量，
//! 可通过配置文件覆盖

use serde::{Deserialize, Serialize};

use super::enums::{AlertSeverity, CommodityCategory};
use super::value_objects::{Band, Sensitivity};

/// 单个品类的储存参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// 理想温度区间（°C）
    pub ideal_temperature: Band,
    /// 理想湿度区间（%RH）
    pub ideal_humidity: Band,
    /// 默认敏感系数
    pub sensitivity: Sensitivity,
}

impl CategoryProfile {
    pub const fn new(ideal_temperature: Band, ideal_humidity: Band, sensitivity: Sensitivity) -> Self {
        Self {
            ideal_temperature,
            ideal_humidity,
            sensitivity,
        }
    }

    fn check(&self) -> Result<(), String> {
        if !self.ideal_temperature.is_valid() {
            return Err("ideal_temperature must be a finite range with min <= max".to_string());
        }
        if !self.ideal_humidity.is_valid() {
            return Err("ideal_humidity must be a finite range with min <= max".to_string());
        }
        self.sensitivity.check()
    }
}

/// 全部品类的参数表
///
/// 每个品类一个字段，查表不会缺项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfiles {
    pub grain: CategoryProfile,
    pub pulse: CategoryProfile,
    pub vegetable: CategoryProfile,
    pub fruit: CategoryProfile,
    pub dairy: CategoryProfile,
    pub meat: CategoryProfile,
    pub other: CategoryProfile,
}

impl CategoryProfiles {
    pub fn get(&self, category: CommodityCategory) -> &CategoryProfile {
        match category {
            CommodityCategory::Grain => &self.grain,
            CommodityCategory::Pulse => &self.pulse,
            CommodityCategory::Vegetable => &self.vegetable,
            CommodityCategory::Fruit => &self.fruit,
            CommodityCategory::Dairy => &self.dairy,
            CommodityCategory::Meat => &self.meat,
            CommodityCategory::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, category: CommodityCategory) -> &mut CategoryProfile {
        match category {
            CommodityCategory::Grain => &mut self.grain,
            CommodityCategory::Pulse => &mut self.pulse,
            CommodityCategory::Vegetable => &mut self.vegetable,
            CommodityCategory::Fruit => &mut self.fruit,
            CommodityCategory::Dairy => &mut self.dairy,
            CommodityCategory::Meat => &mut self.meat,
            CommodityCategory::Other => &mut self.other,
        }
    }
}

impl Default for CategoryProfiles {
    fn default() -> Self {
        Self {
            grain: CategoryProfile::new(
                Band::new(10.0, 20.0),
                Band::new(50.0, 65.0),
                Sensitivity::new(2.0, 3.0),
            ),
            pulse: CategoryProfile::new(
                Band::new(10.0, 25.0),
                Band::new(50.0, 65.0),
                Sensitivity::new(1.5, 2.5),
            ),
            vegetable: CategoryProfile::new(
                Band::new(2.0, 10.0),
                Band::new(85.0, 95.0),
                Sensitivity::new(1.0, 0.5),
            ),
            fruit: CategoryProfile::new(
                Band::new(2.0, 8.0),
                Band::new(85.0, 95.0),
                Sensitivity::new(1.2, 0.5),
            ),
            dairy: CategoryProfile::new(
                Band::new(1.0, 4.0),
                Band::new(75.0, 85.0),
                Sensitivity::new(2.0, 0.2),
            ),
            meat: CategoryProfile::new(
                Band::new(-2.0, 2.0),
                Band::new(80.0, 90.0),
                Sensitivity::new(3.0, 0.2),
            ),
            other: CategoryProfile::new(
                Band::new(10.0, 25.0),
                Band::new(40.0, 70.0),
                Sensitivity::new(1.0, 0.5),
            ),
        }
    }
}

/// 单个维度的安全运行界限
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingLimit {
    /// 安全运行区间
    pub band: Band,
    /// 轻度越界距离；越界超过两倍即为严重
    pub mild_margin: f64,
}

/// 一次越界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excursion {
    pub severity: AlertSeverity,
    /// 低于下限为负，高于上限为正
    pub signed_distance: f64,
}

impl OperatingLimit {
    pub const fn new(band: Band, mild_margin: f64) -> Self {
        Self { band, mild_margin }
    }

    /// 判断读数是否越界，区间内（或读数无效）返回 None
    pub fn classify(&self, value: f64) -> Option<Excursion> {
        let distance = self.band.deviation(value);
        if distance <= 0.0 {
            return None;
        }

        let severity = if distance > 2.0 * self.mild_margin {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };

        Some(Excursion {
            severity,
            signed_distance: self.band.signed_deviation(value),
        })
    }

    fn check(&self) -> Result<(), String> {
        if !self.band.is_valid() {
            return Err("band must be a finite range with min <= max".to_string());
        }
        if !self.mild_margin.is_finite() || self.mild_margin < 0.0 {
            return Err(format!(
                "mild_margin must be a non-negative number, got {}",
                self.mild_margin
            ));
        }
        Ok(())
    }
}

/// 仓库安全运行界限，与具体库存无关
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeOperatingLimits {
    pub temperature: OperatingLimit,
    pub humidity: OperatingLimit,
}

impl Default for SafeOperatingLimits {
    fn default() -> Self {
        Self {
            temperature: OperatingLimit::new(Band::new(5.0, 30.0), 3.0),
            humidity: OperatingLimit::new(Band::new(30.0, 75.0), 5.0),
        }
    }
}

/// 引擎全部可调参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub profiles: CategoryProfiles,
    #[serde(default)]
    pub safe_operating: SafeOperatingLimits,
    /// 天气预警扣减相对当前读数扣减的权重，取值 [0, 1]
    #[serde(default = "default_weather_weight")]
    pub weather_weight: f64,
    /// 参与预警的预报天数
    #[serde(default = "default_forecast_horizon_days")]
    pub forecast_horizon_days: usize,
}

fn default_weather_weight() -> f64 {
    0.5
}

fn default_forecast_horizon_days() -> usize {
    3
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            profiles: CategoryProfiles::default(),
            safe_operating: SafeOperatingLimits::default(),
            weather_weight: default_weather_weight(),
            forecast_horizon_days: default_forecast_horizon_days(),
        }
    }
}

impl EngineSettings {
    /// 校验全部参数，返回第一个错误
    pub fn validate(&self) -> Result<(), String> {
        for category in CommodityCategory::ALL {
            self.profiles
                .get(category)
                .check()
                .map_err(|e| format!("profiles.{}: {}", category, e))?;
        }

        self.safe_operating
            .temperature
            .check()
            .map_err(|e| format!("safe_operating.temperature: {}", e))?;
        self.safe_operating
            .humidity
            .check()
            .map_err(|e| format!("safe_operating.humidity: {}", e))?;

        if !(0.0..=1.0).contains(&self.weather_weight) {
            return Err(format!(
                "weather_weight must be within [0, 1], got {}",
                self.weather_weight
            ));
        }

        Ok(())
    }
}
