//! CLI command for the budget summary

use clap::Args;

use super::BudgetInput;
use crate::config::Settings;
use crate::display::{
    format_distribution, format_income_vs_expenses, format_ingest_notes, format_progress,
    format_summary_table,
};
use crate::error::TallyResult;
use crate::services::InputFormat;

/// Print the categorized summary of a budget file
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: BudgetInput,

    /// Input format (inferred from the file extension by default)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> TallyResult<()> {
    let (state, report) = args.input.load(settings, args.format)?;
    let presented = state.presented();
    let symbol = args.input.currency(settings);

    println!("Budget Summary ({})", presented.period.label());
    println!("{}", format_summary_table(&presented, symbol));
    println!();

    println!("Income vs Expenses");
    println!("{}", format_income_vs_expenses(&presented, symbol));
    println!();

    println!("Expense Distribution");
    println!("{}", format_distribution(&presented, symbol));
    println!();

    println!("Savings Progress");
    if presented.goal.is_set() {
        println!("{}", format_progress(&presented, symbol));
    } else {
        println!("No savings goal set. Use --goal or set savings_goal in the config file.");
    }
    println!();
    println!("{}", presented.outlook().message());

    if let Some(notes) = format_ingest_notes(&report) {
        println!();
        println!("Note: {}", notes.replace('\n', "\nNote: "));
    }

    Ok(())
}
