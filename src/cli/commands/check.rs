use crate::cli::commands::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, Rules};
use crate::core::report::format_issues;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success, warning, wrapped};

/// Handle the `check` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { input, strict } = cmd {
        let rows = load_input(input)?;
        let calc = Core::recalculate(&rows, &Rules::from(cfg));

        header(format!("Issues: {input}"));
        wrapped(&format_issues(&calc), cfg.wrap_width);
        println!();

        let count = calc.issues.len();
        if count == 0 {
            success(format!("{} row(s) checked, no issues.", calc.row_count));
        } else {
            warning(format!(
                "{} row(s) checked, {} issue(s) found.",
                calc.row_count, count
            ));
            if *strict {
                return Err(AppError::ValidationFailed(count));
            }
        }
    }
    Ok(())
}
