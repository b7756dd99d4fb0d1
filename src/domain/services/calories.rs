//! # Calorie Calculation
//!
//! 歩幅・距離・平均速度・消費カロリーの計算式

use chrono::TimeDelta;

use crate::domain::errors::{Result, TrackerError};
use crate::domain::services::duration::{as_hours, as_minutes};

/// 歩数のみの記録で使う固定の歩幅（メートル）
pub const FIXED_STRIDE_LENGTH_M: f64 = 0.65;
/// 身長から歩幅を求める係数
pub const STRIDE_LENGTH_COEFFICIENT: f64 = 0.45;
/// ウォーキングの消費カロリー係数
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

const METERS_IN_KM: f64 = 1000.0;
const MINUTES_IN_HOUR: f64 = 60.0;

/// 身長から歩幅を推定する
pub fn stride_length(height: f64) -> f64 {
    height * STRIDE_LENGTH_COEFFICIENT
}

/// 歩数と歩幅（メートル）から距離（km）を求める
pub fn distance_km(steps: u64, stride_length_m: f64) -> f64 {
    steps as f64 * stride_length_m / METERS_IN_KM
}

/// 平均速度（km/h）
///
/// 時間が0以下の場合はゼロ除算を避けて0を返す
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

/// ランニングの消費カロリー
pub fn running_calories(weight_kg: f64, avg_speed_kmh: f64, duration_minutes: f64) -> f64 {
    weight_kg * avg_speed_kmh * duration_minutes / MINUTES_IN_HOUR
}

/// ウォーキングの消費カロリー（ランニングの半分）
pub fn walking_calories(weight_kg: f64, avg_speed_kmh: f64, duration_minutes: f64) -> f64 {
    running_calories(weight_kg, avg_speed_kmh, duration_minutes) * WALKING_CALORIES_COEFFICIENT
}

/// 入力を検証してからウォーキングの消費カロリーを計算する
///
/// 平均速度は身長から求めた歩幅で計算する
///
/// # Errors
///
/// 歩数・時間・身長・体重のいずれかが0以下の場合、この順で最初に
/// 該当したものに対応するエラーを返す
pub fn walking_spent_calories(
    steps: u64,
    weight_kg: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64> {
    validate_inputs(steps, weight_kg, height, duration)?;
    let avg_speed = height_based_speed(steps, height, duration);
    Ok(walking_calories(weight_kg, avg_speed, as_minutes(duration)))
}

/// 入力を検証してからランニングの消費カロリーを計算する
///
/// # Errors
///
/// [`walking_spent_calories`] と同じ
pub fn running_spent_calories(
    steps: u64,
    weight_kg: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64> {
    validate_inputs(steps, weight_kg, height, duration)?;
    let avg_speed = height_based_speed(steps, height, duration);
    Ok(running_calories(weight_kg, avg_speed, as_minutes(duration)))
}

/// 身長由来の歩幅による平均速度
pub fn height_based_speed(steps: u64, height: f64, duration: TimeDelta) -> f64 {
    let distance = distance_km(steps, stride_length(height));
    mean_speed_kmh(distance, as_hours(duration))
}

fn validate_inputs(steps: u64, weight_kg: f64, height: f64, duration: TimeDelta) -> Result<()> {
    if steps == 0 {
        return Err(TrackerError::NonPositiveSteps);
    }
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::NonPositiveDuration);
    }
    // NaN は正の値として扱わない
    if height.is_nan() || height <= 0.0 {
        return Err(TrackerError::NonPositiveHeight);
    }
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(TrackerError::NonPositiveWeight);
    }
    Ok(())
}
