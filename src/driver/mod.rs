//! # Driver Layer (Presentation)
//!
//! CLIの外部インターフェースを提供
//!
//! ## 特徴
//!
//! - 身体情報を解決してユースケースを呼び出す
//! - 依存性注入（DI）を行い、全てを組み立てる
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::TrackerWorkflow;
