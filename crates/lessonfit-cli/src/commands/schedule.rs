use clap::Args;

use super::{block_on, print_json, OracleArgs};

#[derive(Args)]
pub struct ScheduleArgs {
    /// Learning goal
    pub goal: String,
    #[command(flatten)]
    pub oracle: OracleArgs,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let planner = args.oracle.planner()?;
    let advisory = planner.advisory();
    let plan = block_on(async {
        let constraint = advisory.smart_duration(&args.goal).await;
        advisory.smart_study_plan(&args.goal, &constraint).await
    })?;
    print_json(&plan)
}
