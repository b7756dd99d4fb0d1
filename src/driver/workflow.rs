//! Workflow Orchestration
//!
//! 身体情報の解決とユースケースの呼び出し

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::application::use_cases::day_steps::{day_steps_summary, try_day_steps_report};
use crate::application::use_cases::training::{training_report, training_summary};
use crate::domain::entities::activity::Biometrics;
use crate::domain::repositories::profile_repository::ProfileRepository;

use super::cli::{Args, Command};

/// Tracker Workflow
pub struct TrackerWorkflow<P: ProfileRepository> {
    profile_repository: Arc<P>,
}

impl<P: ProfileRepository> TrackerWorkflow<P> {
    /// Create a new workflow instance with dependency injection
    pub fn new(profile_repository: Arc<P>) -> Self {
        Self { profile_repository }
    }

    /// Resolve weight and height from the flags, falling back to the profile
    ///
    /// The profile is only read when a flag is missing.
    pub fn resolve_biometrics(&self, args: &Args) -> Result<Biometrics> {
        let profile = match (args.weight, args.height) {
            (Some(_), Some(_)) => None,
            _ => self.profile_repository.load(Path::new(&args.profile))?,
        };

        let weight_kg = args
            .weight
            .or(profile.map(|p| p.weight_kg))
            .with_context(|| {
                format!(
                    "Weight not provided: pass --weight or set it in {}",
                    args.profile
                )
            })?;
        let height = args
            .height
            .or(profile.map(|p| p.height))
            .with_context(|| {
                format!(
                    "Height not provided: pass --height or set it in {}",
                    args.profile
                )
            })?;

        Ok(Biometrics::new(weight_kg, height))
    }

    /// Execute the workflow and return the text to print
    ///
    /// A failed steps summary yields an empty string; a failed training
    /// summary is returned as an error.
    pub fn execute(&self, args: &Args) -> Result<String> {
        let biometrics = self.resolve_biometrics(args)?;

        match &args.command {
            Command::Steps { record } => {
                info!("Summarizing day steps: {}", record);
                if !args.json {
                    return Ok(day_steps_summary(
                        record,
                        biometrics.weight_kg,
                        biometrics.height,
                    ));
                }
                match try_day_steps_report(record, &biometrics) {
                    Some(report) => to_json_line(&report),
                    None => Ok(String::new()),
                }
            }
            Command::Training { record } => {
                info!("Summarizing training: {}", record);
                if args.json {
                    let report = training_report(record, &biometrics)?;
                    Ok(to_json_line(&report)?)
                } else {
                    Ok(training_summary(
                        record,
                        biometrics.weight_kg,
                        biometrics.height,
                    )?)
                }
            }
        }
    }
}

fn to_json_line<T: serde::Serialize>(report: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    Ok(format!("{}\n", json))
}
