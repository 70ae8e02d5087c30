use clap::Args;
use lessonfit_core::duration::budget;
use serde::Serialize;

use super::print_json;

#[derive(Args)]
pub struct BudgetArgs {
    /// Number of study days
    pub days: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetView {
    total_days: u32,
    daily_study_hours: f64,
    total_study_hours: f64,
    realistic_lesson_count: u32,
}

pub fn run(args: BudgetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let total = budget::total_study_hours(args.days);
    print_json(&BudgetView {
        total_days: args.days,
        daily_study_hours: budget::daily_hours(args.days),
        total_study_hours: total,
        realistic_lesson_count: budget::realistic_lesson_count(total),
    })
}
