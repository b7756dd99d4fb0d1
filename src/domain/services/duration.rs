//! # Duration Parser
//!
//! `1h30m` や `45m` のような `<数値><単位>` の並びを一つの時間に変換する
//!
//! 対応単位は `h`（時間）、`m`（分）、`s`（秒）のみ。
//! 数値は小数を許可し、先頭に符号を一つだけ付けられる。

use chrono::TimeDelta;

use crate::domain::errors::{Result, TrackerError};

const NANOS_IN_SECOND: f64 = 1_000_000_000.0;
const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_HOUR: f64 = 3_600.0;

fn unit_in_seconds(unit: &str) -> Option<f64> {
    match unit {
        "h" => Some(SECONDS_IN_HOUR),
        "m" => Some(SECONDS_IN_MINUTE),
        "s" => Some(1.0),
        _ => None,
    }
}

/// 時間表現を解析する
///
/// # Errors
///
/// 空文字列、単位の欠落、未対応の単位、範囲外の値、1ナノ秒未満の正の値の場合に
/// `TrackerError::MalformedDuration` を返す。値の正負は検証しない。
pub fn parse_duration(text: &str) -> Result<TimeDelta> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(TrackerError::malformed_duration(text, "empty duration"));
    }

    let mut total_seconds = 0.0_f64;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number = &rest[..number_end];
        if !number.bytes().any(|b| b.is_ascii_digit()) {
            return Err(TrackerError::malformed_duration(text, "expected a number"));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| TrackerError::malformed_duration(text, "invalid number"))?;
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        if unit.is_empty() {
            return Err(TrackerError::malformed_duration(text, "missing unit"));
        }
        let scale = unit_in_seconds(unit).ok_or_else(|| {
            TrackerError::malformed_duration(text, format!("unknown unit {:?}", unit))
        })?;
        rest = &rest[unit_end..];

        total_seconds += value * scale;
    }

    let nanos = (total_seconds * NANOS_IN_SECOND).round();
    if !nanos.is_finite() || nanos >= i64::MAX as f64 {
        return Err(TrackerError::malformed_duration(text, "value out of range"));
    }
    // 正の値を0に丸めない
    if nanos == 0.0 && total_seconds > 0.0 {
        return Err(TrackerError::malformed_duration(text, "below resolution"));
    }
    let nanos = if negative { -nanos } else { nanos };

    Ok(TimeDelta::nanoseconds(nanos as i64))
}

/// 時間を時間単位の実数に変換する
pub fn as_hours(duration: TimeDelta) -> f64 {
    as_seconds(duration) / SECONDS_IN_HOUR
}

/// 時間を分単位の実数に変換する
pub fn as_minutes(duration: TimeDelta) -> f64 {
    as_seconds(duration) / SECONDS_IN_MINUTE
}

fn as_seconds(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(err: TrackerError) -> String {
        match err {
            TrackerError::MalformedDuration { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_single_unit() {
        assert_eq!(parse_duration("45m").unwrap(), TimeDelta::minutes(45));
        assert_eq!(parse_duration("2h").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("30s").unwrap(), TimeDelta::seconds(30));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(
            parse_duration("1h1m1s").unwrap(),
            TimeDelta::seconds(3_661)
        );
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), TimeDelta::seconds(30));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_duration("-1h").unwrap(), TimeDelta::hours(-1));
        assert_eq!(parse_duration("+10m").unwrap(), TimeDelta::minutes(10));
    }

    #[test]
    fn test_parse_bare_zero() {
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("0m").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(reason_of(parse_duration("").unwrap_err()), "empty duration");
        assert_eq!(reason_of(parse_duration("-").unwrap_err()), "empty duration");
    }

    #[test]
    fn test_parse_rejects_missing_unit() {
        assert_eq!(reason_of(parse_duration("90").unwrap_err()), "missing unit");
        assert_eq!(reason_of(parse_duration("1h30").unwrap_err()), "missing unit");
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let reason = reason_of(parse_duration("3d").unwrap_err());
        assert!(reason.contains("unknown unit"));
        assert!(parse_duration("1 h").is_err());
        assert!(parse_duration("10ms").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("1..5h").is_err());
        assert!(parse_duration("1h-30m").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let reason = reason_of(parse_duration("99999999999999999999h").unwrap_err());
        assert_eq!(reason, "value out of range");
    }

    #[test]
    fn test_parse_keeps_nanoseconds() {
        assert_eq!(
            parse_duration("0.0000004s").unwrap(),
            TimeDelta::nanoseconds(400)
        );
        assert_eq!(
            parse_duration("0.0000007s").unwrap(),
            TimeDelta::nanoseconds(700)
        );
    }

    #[test]
    fn test_parse_rejects_below_resolution() {
        let reason = reason_of(parse_duration("0.0000000004s").unwrap_err());
        assert_eq!(reason, "below resolution");
        assert_eq!(parse_duration("0s").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_error_keeps_input() {
        let err = parse_duration("1x").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::MalformedDuration { ref input, .. } if input == "1x"
        ));
    }

    #[test]
    fn test_as_hours_and_minutes() {
        let duration = TimeDelta::minutes(45);
        assert_eq!(as_hours(duration), 0.75);
        assert_eq!(as_minutes(duration), 45.0);
    }
}
