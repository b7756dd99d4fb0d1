//! # Domain Errors
//!
//! レコード解析と計算で発生するエラーの定義

use thiserror::Error;

/// アクティビティ計算のエラー
///
/// 値で比較できるよう、全てのバリアントは `Clone` / `PartialEq` を実装する
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// フィールド数が期待値と一致しない
    #[error("invalid field count: expected {expected}, got {actual}")]
    InvalidFieldCount { expected: usize, actual: usize },

    /// 整数として解析できない
    #[error("malformed number {input:?}: {reason}")]
    MalformedNumber { input: String, reason: String },

    /// 時間表現として解析できない
    #[error("malformed duration {input:?}: {reason}")]
    MalformedDuration { input: String, reason: String },

    #[error("step count must be greater than 0")]
    NonPositiveSteps,

    #[error("duration must be greater than 0")]
    NonPositiveDuration,

    #[error("height must be greater than 0")]
    NonPositiveHeight,

    #[error("weight must be greater than 0")]
    NonPositiveWeight,

    /// 未対応のアクティビティ種別
    #[error("unknown activity type: {0:?}")]
    UnknownActivityType(String),
}

impl TrackerError {
    pub(crate) fn malformed_duration(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
