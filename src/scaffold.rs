//! Site scaffold assembly
//!
//! Produces the full file set for one scaffold run as in-memory records;
//! the CLI command owns the actual disk writes.

use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::generator::BackendGenerator;
use crate::templates::STYLESHEET;

/// One file produced by the scaffold, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// Full file content.
    pub content: String,
    /// Short description for command output.
    pub description: String,
}

/// Assembles the complete site scaffold: stylesheet, HTML document, and
/// backend source.
pub struct SiteScaffold {
    generator: BackendGenerator,
}

impl SiteScaffold {
    /// Create a scaffold for the given backend identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnsupportedBackend`] for identifiers outside
    /// the supported set.
    pub fn new(identifier: &str, markup: Option<String>) -> Result<Self, ScaffoldError> {
        Ok(Self {
            generator: BackendGenerator::new(identifier, markup)?,
        })
    }

    /// Backend generator in use.
    #[must_use]
    pub const fn generator(&self) -> &BackendGenerator {
        &self.generator
    }

    /// Produce every file of the scaffold, in a fixed order: stylesheet,
    /// HTML document, backend source.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let kind = self.generator.kind();

        Ok(vec![
            GeneratedFile {
                path: PathBuf::from("styles.css"),
                content: STYLESHEET.to_string(),
                description: "stylesheet".to_string(),
            },
            GeneratedFile {
                path: PathBuf::from("index.html"),
                content: self.generator.markup().to_string(),
                description: "HTML document".to_string(),
            },
            GeneratedFile {
                path: PathBuf::from(kind.source_file()),
                content: self.generator.generate()?,
                description: format!("{kind} server"),
            },
        ])
    }
}
