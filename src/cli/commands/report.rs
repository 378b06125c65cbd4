use crate::cli::commands::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, Rules};
use crate::core::report::{format_issues, format_overall, format_weekly};
use crate::errors::AppResult;
use crate::ui::messages::{header, wrapped};

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        overall,
        weekly,
        issues,
    } = cmd
    {
        let rows = load_input(input)?;
        let calc = Core::recalculate(&rows, &Rules::from(cfg));

        // nessuna sezione richiesta → tutte
        let all = !(*overall || *weekly || *issues);

        if all || *overall {
            header("Overall totals");
            println!("{}\n", format_overall(&calc));
        }

        if all || *weekly {
            header("Weekly totals");
            println!("{}\n", format_weekly(&calc));
        }

        if all || *issues {
            header("Issues");
            wrapped(&format_issues(&calc), cfg.wrap_width);
        }
    }
    Ok(())
}
