//! Backend selection and validation

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;
use crate::render::{BackendRenderer, FlaskRenderer, GinRenderer, SlimPhpRenderer};

/// Supported backend frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Python Flask application
    Flask,
    /// Go Gin application
    Gin,
    /// PHP Slim application
    SlimPhp,
}

impl BackendKind {
    /// Every supported backend, in presentation order.
    pub const ALL: [Self; 3] = [Self::Flask, Self::Gin, Self::SlimPhp];

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Flask => "flask",
            Self::Gin => "gin",
            Self::SlimPhp => "php-slim",
        }
    }

    /// File name of the generated server source.
    #[must_use]
    pub const fn source_file(self) -> &'static str {
        match self {
            Self::Flask => "app.py",
            Self::Gin => "main.go",
            Self::SlimPhp => "index.php",
        }
    }

    /// Shell command that runs the generated server.
    #[must_use]
    pub const fn run_hint(self) -> &'static str {
        match self {
            Self::Flask => "python app.py",
            Self::Gin => "go run main.go",
            Self::SlimPhp => "php -S localhost:8000 index.php",
        }
    }

    /// Construct the renderer for this backend.
    #[must_use]
    pub fn renderer(self) -> Box<dyn BackendRenderer> {
        match self {
            Self::Flask => Box::new(FlaskRenderer::new()),
            Self::Gin => Box::new(GinRenderer::new()),
            Self::SlimPhp => Box::new(SlimPhpRenderer::new()),
        }
    }
}

impl FromStr for BackendKind {
    type Err = ScaffoldError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == identifier)
            .ok_or_else(|| ScaffoldError::UnsupportedBackend(identifier.to_string()))
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
