//! Presentation helpers for fetched data.
//!
//! The client itself only returns values and typed errors; rendering,
//! printing and saving are separate concerns layered on top. Callers that
//! want different output formats can ignore this module entirely.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{PdbeError, Result};

/// Render a value as indented JSON text.
pub fn to_pretty_json<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a value to stdout as indented JSON, followed by a newline.
pub fn print_json<T>(value: &T) -> Result<()>
where
    T: ?Sized + Serialize,
{
    let rendered = to_pretty_json(value)?;
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{rendered}").map_err(|e| PdbeError::IoError {
        message: e.to_string(),
    })
}

/// Write a value to `path` as indented JSON.
///
/// The path is taken as given; no extension is appended. The written file
/// parses back to a value structurally equal to the one passed in.
///
/// # Example
///
/// ```no_run
/// use pdbe_client::{report, PdbeClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PdbeClient::new();
///     let summary = client.fetch_summary("1cbs").await?;
///     report::write_json(&summary, "1cbs_summary.json")?;
///     Ok(())
/// }
/// ```
pub fn write_json<T>(value: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: ?Sized + Serialize,
{
    let rendered = to_pretty_json(value)?;
    fs::write(path, rendered).map_err(|e| PdbeError::IoError {
        message: e.to_string(),
    })
}
