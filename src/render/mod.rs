//! Per-backend source renderers

pub mod flask;
pub mod gin;
pub mod slim_php;

pub use flask::FlaskRenderer;
pub use gin::GinRenderer;
pub use slim_php::SlimPhpRenderer;

use crate::error::ScaffoldError;
use crate::routes::RouteSpec;

/// A backend renderer turns an ordered route sequence into one complete,
/// self-contained server source file.
///
/// Rendering is pure: no state survives a call, identical input produces
/// byte-identical output, and handler order follows input order with no
/// deduplication. An empty route sequence still renders the preamble and
/// trailer.
pub trait BackendRenderer {
    /// Render the full source text for the given routes.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    fn render(&self, routes: &[RouteSpec]) -> Result<String, ScaffoldError>;
}
