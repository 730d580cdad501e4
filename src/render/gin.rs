//! Gin-style renderer

use handlebars::Handlebars;
use serde_json::json;

use super::BackendRenderer;
use crate::error::ScaffoldError;
use crate::routes::RouteSpec;
use crate::templates::{GIN_HANDLER, GIN_PREAMBLE, GIN_TRAILER};

/// Renders a Go Gin application.
pub struct GinRenderer {
    handlebars: Handlebars<'static>,
}

impl GinRenderer {
    /// Create the renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }
}

impl Default for GinRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRenderer for GinRenderer {
    fn render(&self, routes: &[RouteSpec]) -> Result<String, ScaffoldError> {
        let mut source = String::from(GIN_PREAMBLE);

        for route in routes {
            let context = json!({
                "method": route.method,
                "path": route.path,
                "ack": route.method.ack(),
            });
            source.push_str(&self.handlebars.render_template(GIN_HANDLER, &context)?);
        }

        source.push_str(GIN_TRAILER);
        Ok(source)
    }
}
