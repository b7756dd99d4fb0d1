//! # Domain Services
//!
//! - **record_parser**: カンマ区切りレコードの解析と検証
//! - **duration**: `1h30m` 形式の時間表現の解析
//! - **calories**: 距離・平均速度・消費カロリーの計算式

pub mod calories;
pub mod duration;
pub mod record_parser;
