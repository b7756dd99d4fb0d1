//! # Daytrack
//!
//! 一日の歩数やトレーニングの記録（`8000,1h30m`、`5000,Running,45m`）から
//! 距離・平均速度・消費カロリーを求めて要約を作るライブラリ
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: レコード解析と計算式（外部依存なし、純粋関数のみ）
//! - **Application層**: 要約を作るエントリーポイント
//! - **Adapter層**: 身体情報プロファイルの読み込み
//! - **Driver層**: CLI、依存性注入
//!
//! 全ての呼び出しは同期的で、呼び出し間で状態を共有しません。

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use application::use_cases::day_steps::{
    day_steps_report, day_steps_summary, try_day_steps_report,
};
pub use application::use_cases::training::{training_report, training_summary};
pub use domain::entities::activity::{ActivityKind, Biometrics, ParsedActivity};
pub use domain::entities::report::{ActivityReport, DayStepsReport};
pub use domain::errors::TrackerError;
