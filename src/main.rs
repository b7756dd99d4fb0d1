//! Daytrack - Activity Summary CLI
//!
//! 歩数・トレーニング記録の要約を出力

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use daytrack::adapter::repositories::json_profile_repository::JsonProfileRepository;
use daytrack::driver::{Args, TrackerWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Create workflow with injected dependencies
    let workflow = TrackerWorkflow::new(Arc::new(JsonProfileRepository::new()));

    let output = workflow.execute(&args)?;
    print!("{}", output);

    Ok(())
}
