//! # Record Parser
//!
//! カンマ区切りのアクティビティ記録を `ParsedActivity` に変換する

use chrono::TimeDelta;
use log::debug;

use crate::domain::entities::activity::ParsedActivity;
use crate::domain::errors::{Result, TrackerError};
use crate::domain::services::duration::parse_duration;

const FIELD_SEPARATOR: char = ',';

/// レコードの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// `<steps>,<duration>`（種別は暗黙的にウォーキング）
    StepsOnly,
    /// `<steps>,<label>,<duration>`
    Labeled,
}

impl RecordLayout {
    pub const fn field_count(self) -> usize {
        match self {
            Self::StepsOnly => 2,
            Self::Labeled => 3,
        }
    }
}

/// レコードを解析して検証する
///
/// # Arguments
///
/// * `raw` - カンマ区切りのレコード
/// * `layout` - 期待するフィールド構成
///
/// # Errors
///
/// - フィールド数が一致しない場合は `InvalidFieldCount`
/// - 歩数が整数でない場合は `MalformedNumber`、0以下なら `NonPositiveSteps`
/// - 時間表現が不正な場合は `MalformedDuration`、0以下なら `NonPositiveDuration`
///
/// ラベルの値はここでは検証しない
pub fn parse_record(raw: &str, layout: RecordLayout) -> Result<ParsedActivity> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    let expected = layout.field_count();
    if fields.len() != expected {
        return Err(TrackerError::InvalidFieldCount {
            expected,
            actual: fields.len(),
        });
    }

    let steps = parse_steps(fields[0])?;

    let label = match layout {
        RecordLayout::StepsOnly => None,
        RecordLayout::Labeled => Some(fields[1].to_string()),
    };

    let duration = parse_duration(fields[expected - 1])?;
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::NonPositiveDuration);
    }

    debug!("Parsed record {:?}: {} steps, {:?}", raw, steps, duration);

    Ok(ParsedActivity {
        steps,
        label,
        duration,
    })
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field.parse().map_err(|e: std::num::ParseIntError| {
        TrackerError::MalformedNumber {
            input: field.to_string(),
            reason: e.to_string(),
        }
    })?;

    if steps <= 0 {
        return Err(TrackerError::NonPositiveSteps);
    }

    Ok(steps.unsigned_abs())
}
