//! # Activity Entity
//!
//! 解析済みのアクティビティ記録と身体情報

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::TrackerError;

/// アクティビティ種別
///
/// 消費カロリーの計算式を選択するためのラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Running => "Running",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    /// ラベルは大文字小文字を区別して完全一致で比較する
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Walking" => Ok(Self::Walking),
            "Running" => Ok(Self::Running),
            other => Err(TrackerError::UnknownActivityType(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 検証済みのアクティビティ記録
///
/// `steps > 0` かつ `duration > 0` が常に成り立つ。
/// ラベルは解析時には検証せず、そのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedActivity {
    pub steps: u64,
    pub label: Option<String>,
    pub duration: TimeDelta,
}

/// 身体情報
///
/// 体重はkg、身長は歩幅の計算に使う単位（呼び出し側で統一する）
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height: f64,
}

impl Biometrics {
    pub fn new(weight_kg: f64, height: f64) -> Self {
        Self { weight_kg, height }
    }
}
