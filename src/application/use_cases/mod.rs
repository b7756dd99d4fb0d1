//! # Use Cases
//!
//! - **day_steps**: 一日の歩数の要約（失敗はログのみで空文字列を返す）
//! - **training**: トレーニングの要約（失敗は型付きエラーとして伝播する）

pub mod day_steps;
pub mod training;
