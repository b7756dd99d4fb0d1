//! # Report Entities
//!
//! 計算結果のレポート。`Display` で人が読める要約を出力する

use serde::Serialize;
use std::fmt;

use super::activity::ActivityKind;

/// 一日の歩数レポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStepsReport {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DayStepsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance covered: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2}.", self.calories)
    }
}

/// トレーニングレポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    pub kind: ActivityKind,
    pub steps: u64,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.kind)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.avg_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}
