use crate::cli::commands::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Rules;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let rows = load_input(input)?;
        ExportLogic::export(&rows, &Rules::from(cfg), *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
