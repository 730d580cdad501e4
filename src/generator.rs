//! Backend generation orchestration

use tracing::debug;

use crate::backend::BackendKind;
use crate::error::ScaffoldError;
use crate::routes::{self, RouteSpec};
use crate::templates::DEFAULT_MARKUP;

/// Turns HTMX-annotated markup into server source for one backend.
#[derive(Debug)]
pub struct BackendGenerator {
    kind: BackendKind,
    markup: String,
}

impl BackendGenerator {
    /// Create a generator for the given backend identifier.
    ///
    /// The identifier is validated before any markup is touched. When no
    /// markup is supplied, the built-in sample document is scanned instead.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnsupportedBackend`] for identifiers outside
    /// the supported set.
    pub fn new(identifier: &str, markup: Option<String>) -> Result<Self, ScaffoldError> {
        let kind = identifier.parse::<BackendKind>()?;
        let markup = markup.unwrap_or_else(|| DEFAULT_MARKUP.to_string());
        Ok(Self { kind, markup })
    }

    /// Selected backend.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        self.kind
    }

    /// The markup that will be scanned.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Routes resolved from the markup, in document order.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteSpec> {
        routes::extract_routes(&self.markup)
    }

    /// Scan the markup and render the backend source.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate(&self) -> Result<String, ScaffoldError> {
        let routes = self.routes();
        debug!(backend = %self.kind, routes = routes.len(), "rendering backend source");
        self.kind.renderer().render(&routes)
    }
}
