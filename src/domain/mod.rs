//! # Domain Layer
//!
//! アクティビティ記録の解析と計算に関する核心的なルールを定義します。
//!
//! ## 特徴
//!
//! - 入出力を持たない純粋な関数のみ
//! - 呼び出し間で共有される状態を持たない
//!
//! ## 構成要素
//!
//! - **entities**: 解析済みアクティビティ、身体情報、レポート
//! - **errors**: エラー種別
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: レコード解析、時間表現の解析、距離・カロリー計算

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
