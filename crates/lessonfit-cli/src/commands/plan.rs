use std::path::PathBuf;

use clap::Args;

use super::fit::read_curriculum;
use super::{block_on, print_json, OracleArgs};

#[derive(Args)]
pub struct PlanArgs {
    /// Learning goal
    pub goal: String,
    /// Use this curriculum instead of asking the oracle for one
    #[arg(long, value_name = "FILE")]
    pub curriculum: Option<PathBuf>,
    #[command(flatten)]
    pub oracle: OracleArgs,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let planner = args.oracle.planner()?;
    let plan = match &args.curriculum {
        Some(path) => {
            let curriculum = read_curriculum(path)?;
            block_on(planner.assemble(&args.goal, curriculum))?
        }
        None => block_on(planner.generate(&args.goal))??,
    };
    print_json(&plan)
}
