//! # Application Layer
//!
//! 外部から呼び出されるエントリーポイント（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のパーサーと計算式を組み合わせて要約を作る
//! - エラーの伝播方針はエントリーポイントごとに異なる
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース

pub mod use_cases;
