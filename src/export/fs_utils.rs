// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decides whether `path` may be (over)written.
///
/// A missing file or `force` passes straight away; an existing file needs
/// an explicit `y`/`yes` on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "cancelled, '{}' left untouched",
            path.display()
        ))),
    }
}

/// Writes `content` to `path` once the overwrite check passed.
pub(crate) fn write_output(path: &Path, content: &str, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    fs::write(path, content)?;
    Ok(())
}
