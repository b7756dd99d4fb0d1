//! # Domain Entities
//!
//! 一回の呼び出しの中で生成・破棄される値オブジェクト
//!
//! ## エンティティ
//!
//! - **ParsedActivity**: 検証済みのアクティビティ記録
//! - **Biometrics**: 呼び出し側が所有する身体情報
//! - **DayStepsReport / ActivityReport**: 計算結果のレポート

pub mod activity;
pub mod report;
