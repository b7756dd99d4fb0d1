//! JSON Profile Repository Implementation
//!
//! ProfileRepositoryのJSON実装（身体情報をJSONファイルから読み込む）

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::entities::activity::Biometrics;
use crate::domain::repositories::profile_repository::ProfileRepository;

/// JSONファイルベースのプロファイルリポジトリ
pub struct JsonProfileRepository;

impl JsonProfileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn load(&self, path: &Path) -> Result<Option<Biometrics>> {
        if !path.exists() {
            info!("No profile found at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

        let profile: Biometrics = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile JSON: {}", path.display()))?;

        info!(
            "Loaded profile: weight {} kg, height {}",
            profile.weight_kg, profile.height
        );

        Ok(Some(profile))
    }
}
