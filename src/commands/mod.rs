//! CLI command implementations

pub mod generate;
pub mod scaffold;

pub use generate::GenerateCommand;
pub use scaffold::ScaffoldCommand;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read caller-supplied markup, if a file was given.
fn read_markup(input: Option<&Path>) -> Result<Option<String>> {
    input
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read markup file: {}", path.display()))
        })
        .transpose()
}
