use crate::cli::commands::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, Rules};
use crate::errors::AppResult;
use crate::models::entry::TimeEntryRow;
use crate::models::minutes::Parsed;
use crate::utils::colors::{RESET, color_for_issues};
use crate::utils::format_hm;
use crate::utils::table::{Column, Table};

/// Handle the `list` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { input } = cmd {
        let rows = load_input(input)?;

        if rows.is_empty() {
            println!("No rows in timesheet.");
            return Ok(());
        }

        let calc = Core::recalculate(&rows, &Rules::from(cfg));
        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Date"),
            Column::left("Day"),
            Column::left("Week"),
            Column::right("Start"),
            Column::right("Finish"),
            Column::right("Lunch"),
            Column::right("Basic"),
            Column::right("OT 1.5"),
            Column::right("OT 2.0"),
            Column::right("Worked"),
            Column::right("Issues"),
        ]);

        for row in &rows {
            table.add_row(row_cells(row, calc.issues_for(row.index).count()));
        }

        print!("{}", table.render());

        let count = calc.issues.len();
        println!(
            "\n{} row(s), {}{} issue(s){}",
            rows.len(),
            color_for_issues(count),
            count,
            RESET
        );
    }
    Ok(())
}

fn row_cells(row: &TimeEntryRow, issues: usize) -> Vec<String> {
    let p = row.parse();
    vec![
        row.index.to_string(),
        row.date.clone(),
        row.day_label(),
        p.week.clone(),
        clock_cell(&row.start, p.start),
        clock_cell(&row.finish, p.finish),
        minutes_cell(p.lunch),
        minutes_cell(p.basic),
        minutes_cell(p.ot15),
        minutes_cell(p.ot20),
        p.worked_minutes().map(format_hm).unwrap_or_else(|| "--".into()),
        issues.to_string(),
    ]
}

fn clock_cell(text: &str, value: Parsed) -> String {
    match value {
        Parsed::Invalid if text.trim().is_empty() => "--".into(),
        Parsed::Invalid => "invalid".into(),
        _ => text.trim().to_string(),
    }
}

fn minutes_cell(value: Parsed) -> String {
    value.minutes().map(format_hm).unwrap_or_else(|| "invalid".into())
}
