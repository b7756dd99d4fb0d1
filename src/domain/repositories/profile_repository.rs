//! # Profile Repository Trait
//!
//! 身体情報プロファイルの読み込みを抽象化

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::activity::Biometrics;

/// プロファイルリポジトリ
///
/// 呼び出し側が所有する体重・身長を読み込む
#[cfg_attr(test, automock)]
pub trait ProfileRepository: Send + Sync {
    /// プロファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - プロファイルのパス
    ///
    /// # Returns
    ///
    /// プロファイルが存在しない場合は `None`
    fn load(&self, path: &Path) -> Result<Option<Biometrics>>;
}
