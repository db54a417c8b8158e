//! 处置建议表
//!
//! 行：风险等级（Low, Medium, High, Critical）
//! 列：影响因素组合，温度 1、湿度 2、天气 4 按位组合

use crate::domain::enums::RiskLevel;
use crate::domain::views::AffectedFactors;

const RECOMMENDATIONS: [[&str; 8]; 4] = [
    // Low
    [
        "Storage conditions are optimal. Continue routine monitoring.",
        "Conditions are acceptable, but temperature is slightly outside the ideal range. Adjust cooling at the next check.",
        "Conditions are acceptable, but humidity is slightly outside the ideal range. Check ventilation at the next inspection.",
        "Conditions are acceptable, but temperature and humidity have drifted from the ideal range. Schedule a climate-control check.",
        "Conditions are optimal now, but the forecast shows an adverse swing. Prepare climate control ahead of time.",
        "Temperature is slightly off and the forecast makes it worse. Pre-adjust cooling before the weather changes.",
        "Humidity is slightly off and the forecast makes it worse. Plan extra ventilation or dehumidification.",
        "Temperature and humidity are drifting and the forecast makes both worse. Plan climate-control adjustments now.",
    ],
    // Medium
    [
        "Shelf life is reduced. Review stock rotation and prioritise this batch in outbound plans.",
        "Temperature is shortening shelf life. Lower the storage temperature and move this batch up the dispatch queue.",
        "Humidity is shortening shelf life. Improve ventilation or dehumidify and move this batch up the dispatch queue.",
        "Temperature and humidity are both shortening shelf life. Correct climate control and dispatch within the remaining window.",
        "Forecast conditions threaten this batch. Secure climate control and plan dispatch before the weather turns.",
        "Temperature and the coming weather are shortening shelf life. Increase cooling and schedule early dispatch.",
        "Humidity and the coming weather are shortening shelf life. Dehumidify and schedule early dispatch.",
        "Current climate and the coming weather both threaten this batch. Correct climate control and schedule early dispatch.",
    ],
    // High
    [
        "Shelf life is low. Sell or dispatch this batch soon.",
        "Temperature deviation is rapidly degrading this batch. Move it to cold storage or dispatch within days.",
        "Humidity deviation is rapidly degrading this batch. Move it to a drier store or dispatch within days.",
        "Temperature and humidity deviations are rapidly degrading this batch. Relocate it or dispatch within days.",
        "Upcoming weather puts this batch at high risk. Dispatch or relocate it before conditions change.",
        "Temperature deviation and upcoming weather put this batch at high risk. Relocate to cold storage or dispatch immediately.",
        "Humidity deviation and upcoming weather put this batch at high risk. Relocate to a dry store or dispatch immediately.",
        "Climate deviations and upcoming weather put this batch at high risk. Relocate or dispatch immediately.",
    ],
    // Critical
    [
        "Shelf life is nearly exhausted. Inspect this batch today and sell, process or discard it.",
        "URGENT: temperature has nearly exhausted this batch's shelf life. Move it to cold storage or sell it today.",
        "URGENT: humidity has nearly exhausted this batch's shelf life. Inspect for mould and sell or process it today.",
        "URGENT: temperature and humidity have nearly exhausted this batch's shelf life. Sell, process or discard it today.",
        "URGENT: forecast weather will push this batch past its shelf life. Sell or process it today.",
        "URGENT: temperature and the forecast will exhaust this batch. Move it to cold storage or sell it today.",
        "URGENT: humidity and the forecast will exhaust this batch. Inspect for mould and sell or process it today.",
        "URGENT: climate and forecast conditions will exhaust this batch. Sell, process or discard it today.",
    ],
];

/// 根据风险等级和影响因素选择处置建议
pub fn recommend(risk: RiskLevel, factors: AffectedFactors) -> &'static str {
    RECOMMENDATIONS[risk.index()][factors.index()]
}
