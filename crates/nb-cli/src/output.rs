use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a status line to stderr unless `--quiet`.
pub fn notice(message: &str, flags: &GlobalFlags) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}
