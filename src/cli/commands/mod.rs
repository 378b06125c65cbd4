pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod payload;
pub mod report;

use crate::errors::AppResult;
use crate::import::load_rows;
use crate::models::entry::TimeEntryRow;
use crate::utils::path::expand_tilde;

/// Rows of the timesheet file named on the command line.
pub(crate) fn load_input(input: &str) -> AppResult<Vec<TimeEntryRow>> {
    load_rows(&expand_tilde(input))
}
