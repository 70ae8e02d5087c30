use clap::Args;
use lessonfit_core::duration;

use super::print_json;

#[derive(Args)]
pub struct ParseArgs {
    /// Learning goal, e.g. "Learn Rust in 2 weeks"
    pub goal: String,
    /// Print the human-readable budget instead of JSON
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let constraint = duration::parse(&args.goal);
    if args.text {
        println!("{}", constraint.display_duration());
        return Ok(());
    }
    print_json(&constraint)
}
