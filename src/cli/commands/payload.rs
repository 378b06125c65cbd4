use crate::cli::commands::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{SubmissionPayload, write_output};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `payload` subcommand: the JSON goes to stdout unless `--file`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payload {
        input,
        name,
        from,
        to,
        file,
        force,
    } = cmd
    {
        let name = name.as_deref().unwrap_or(cfg.employee_name.as_str());
        let rows = load_input(input)?;
        let payload = SubmissionPayload::build(name, from, to, &rows)?;
        let json = serde_json::to_string_pretty(&payload)?;

        match file {
            Some(f) => {
                let path = expand_tilde(f);
                write_output(&path, &json, *force)?;
                success(format!("Payload written: {}", path.display()));
            }
            None => println!("{json}"),
        }
    }
    Ok(())
}
