//! Output formatting for roll results.

use colored::Colorize;
use serde::Serialize;

/// Result of a roll invocation, ready for printing.
#[derive(Debug, Serialize)]
pub struct RollReport {
    /// The entry that was rolled, or "ALL"
    pub entry: String,
    /// Whether a single entry was found already current
    pub up_to_date: bool,
    /// Advisory command lines, in processing order
    pub actions: Vec<String>,
}

/// Print one advisory line per action. Command lines stay uncolored so
/// they can be copied or piped; the no-action notice gets a color accent
/// (disabled automatically off-tty).
pub fn print_human(report: &RollReport) {
    if report.up_to_date {
        println!("{}", "Revisions are the same.".green());
        return;
    }
    for action in &report.actions {
        println!("{}", action);
    }
}

/// Print the report as pretty JSON.
pub fn print_json(report: &RollReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}
