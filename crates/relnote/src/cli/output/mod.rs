//! Output formatting utilities

use std::io::Write;
use std::path::Path;

use console::style;
use relnote_core::Result;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Write a generated document to `path`, or to stdout when no path is given.
///
/// A trailing newline is added to non-empty documents lacking one.
pub fn emit(document: &str, path: Option<&Path>, quiet: bool) -> Result<()> {
    let mut document = document.to_string();
    if !document.is_empty() && !document.ends_with('\n') {
        document.push('\n');
    }

    match path {
        Some(path) => {
            std::fs::write(path, &document)?;
            if !quiet {
                success(&format!("Written to {}", style(path.display()).cyan()));
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
