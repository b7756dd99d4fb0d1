//! # Training Use Case
//!
//! `<steps>,<label>,<duration>` 形式の記録からトレーニングの要約を作る

use log::{debug, warn};

use crate::domain::entities::activity::{ActivityKind, Biometrics, ParsedActivity};
use crate::domain::entities::report::ActivityReport;
use crate::domain::errors::Result;
use crate::domain::services::calories::{
    distance_km, mean_speed_kmh, running_spent_calories, stride_length, walking_spent_calories,
};
use crate::domain::services::duration::as_hours;
use crate::domain::services::record_parser::{parse_record, RecordLayout};

/// トレーニングレポートを作成する
///
/// ラベルで計算式を選択する（`Walking` / `Running`）。失敗はログに記録した上で
/// 呼び出し側に伝播する。
///
/// # Errors
///
/// - レコードの解析エラー
/// - 未対応のラベルの場合は `UnknownActivityType`
/// - 身長・体重の検証エラー
pub fn training_report(raw: &str, biometrics: &Biometrics) -> Result<ActivityReport> {
    build_report(raw, biometrics).inspect_err(|e| {
        warn!("Failed to summarize training {:?}: {}", raw, e);
    })
}

/// トレーニングの要約文字列を返す
///
/// # 例
///
/// ```
/// use daytrack::{training_summary, TrackerError};
///
/// let summary = training_summary("5000,Running,45m", 70.0, 1.8).unwrap();
/// assert!(summary.starts_with("Training type: Running"));
///
/// let err = training_summary("1000,Swimming,10m", 70.0, 1.8).unwrap_err();
/// assert_eq!(err, TrackerError::UnknownActivityType("Swimming".to_string()));
/// ```
///
/// # Errors
///
/// [`training_report`] と同じ
pub fn training_summary(raw: &str, weight_kg: f64, height: f64) -> Result<String> {
    training_report(raw, &Biometrics::new(weight_kg, height)).map(|report| report.to_string())
}

fn build_report(raw: &str, biometrics: &Biometrics) -> Result<ActivityReport> {
    let ParsedActivity {
        steps,
        label,
        duration,
    } = parse_record(raw, RecordLayout::Labeled)?;

    let kind: ActivityKind = label.as_deref().unwrap_or_default().parse()?;

    let distance = distance_km(steps, stride_length(biometrics.height));
    let duration_hours = as_hours(duration);
    let avg_speed = mean_speed_kmh(distance, duration_hours);

    let calories = match kind {
        ActivityKind::Walking => {
            walking_spent_calories(steps, biometrics.weight_kg, biometrics.height, duration)?
        }
        ActivityKind::Running => {
            running_spent_calories(steps, biometrics.weight_kg, biometrics.height, duration)?
        }
    };

    debug!(
        "{}: {} steps, {:.3} km, {:.3} km/h, {:.3} kcal",
        kind, steps, distance, avg_speed, calories
    );

    Ok(ActivityReport {
        kind,
        steps,
        duration_hours,
        distance_km: distance,
        avg_speed_kmh: avg_speed,
        calories,
    })
}
