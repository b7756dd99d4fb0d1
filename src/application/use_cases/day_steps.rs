//! # Day Steps Use Case
//!
//! `<steps>,<duration>` 形式の記録から一日の歩数の要約を作る

use log::{debug, warn};

use crate::domain::entities::activity::Biometrics;
use crate::domain::entities::report::DayStepsReport;
use crate::domain::errors::Result;
use crate::domain::services::calories::{distance_km, walking_spent_calories, FIXED_STRIDE_LENGTH_M};
use crate::domain::services::record_parser::{parse_record, RecordLayout};

/// 一日の歩数レポートを作成する
///
/// 距離は固定の歩幅（0.65m）で求め、消費カロリーはウォーキングの計算式
/// （平均速度は身長由来の歩幅）で求める
///
/// # Errors
///
/// レコードの解析または入力の検証に失敗した場合にエラーを返す
pub fn day_steps_report(raw: &str, biometrics: &Biometrics) -> Result<DayStepsReport> {
    let activity = parse_record(raw, RecordLayout::StepsOnly)?;

    let distance = distance_km(activity.steps, FIXED_STRIDE_LENGTH_M);
    let calories = walking_spent_calories(
        activity.steps,
        biometrics.weight_kg,
        biometrics.height,
        activity.duration,
    )?;

    debug!(
        "Day steps: {} steps, {:.3} km, {:.3} kcal",
        activity.steps, distance, calories
    );

    Ok(DayStepsReport {
        steps: activity.steps,
        distance_km: distance,
        calories,
    })
}

/// 一日の歩数の要約文字列を返す
///
/// 失敗した場合はログに記録して空文字列を返す。呼び出し側は失敗理由を
/// 区別できない。
///
/// # 例
///
/// ```
/// use daytrack::day_steps_summary;
///
/// let summary = day_steps_summary("8000,1h", 70.0, 1.75);
/// assert!(summary.starts_with("Steps: 8000."));
///
/// assert_eq!(day_steps_summary("-5,1h", 70.0, 1.75), "");
/// ```
pub fn day_steps_summary(raw: &str, weight_kg: f64, height: f64) -> String {
    try_day_steps_report(raw, &Biometrics::new(weight_kg, height))
        .map(|report| report.to_string())
        .unwrap_or_default()
}

/// 一日の歩数レポートを作成し、失敗した場合はログに記録して `None` を返す
///
/// 失敗理由は呼び出し側に渡さない
pub fn try_day_steps_report(raw: &str, biometrics: &Biometrics) -> Option<DayStepsReport> {
    day_steps_report(raw, biometrics)
        .inspect_err(|e| warn!("Failed to summarize day steps {:?}: {}", raw, e))
        .ok()
}
