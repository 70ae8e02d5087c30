use std::path::{Path, PathBuf};

use clap::Args;
use lessonfit_core::curriculum::fit::fit_with;
use lessonfit_core::{Config, Curriculum};

use super::{block_on, print_json, OracleArgs};

#[derive(Args)]
pub struct FitArgs {
    /// Goal whose duration the curriculum must fit
    #[arg(long)]
    pub goal: String,
    /// Curriculum JSON file ("-" for stdin)
    pub curriculum: PathBuf,
    #[command(flatten)]
    pub oracle: OracleArgs,
}

/// Read a curriculum, treating an empty document or `null` as absent.
pub fn read_curriculum(path: &Path) -> Result<Curriculum, Box<dyn std::error::Error>> {
    let content = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };
    if content.trim().is_empty() {
        return Err("no curriculum to fit".into());
    }
    let curriculum: Option<Curriculum> = serde_json::from_str(&content)?;
    curriculum.ok_or_else(|| "no curriculum to fit".into())
}

pub fn run(args: FitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let curriculum = read_curriculum(&args.curriculum)?;
    let planner = args.oracle.planner()?;
    let constraint = block_on(planner.advisory().smart_duration(&args.goal))?;
    let options = Config::load_or_default().fit.options();

    let (fitted, report) = fit_with(curriculum, &constraint, &options);
    if report.adjusted {
        eprintln!(
            "reduced from {} to {} estimated hours (budget {})",
            report.estimated_hours, report.fitted_hours, report.budget_hours
        );
    }
    print_json(&fitted)
}
