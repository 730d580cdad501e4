//! Slim-PHP-style renderer

use handlebars::Handlebars;
use serde_json::json;

use super::BackendRenderer;
use crate::error::ScaffoldError;
use crate::routes::RouteSpec;
use crate::templates::{SLIM_PHP_HANDLER, SLIM_PHP_PREAMBLE, SLIM_PHP_TRAILER};

/// Renders a PHP Slim application.
pub struct SlimPhpRenderer {
    handlebars: Handlebars<'static>,
}

impl SlimPhpRenderer {
    /// Create the renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }
}

impl Default for SlimPhpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRenderer for SlimPhpRenderer {
    fn render(&self, routes: &[RouteSpec]) -> Result<String, ScaffoldError> {
        let mut source = String::from(SLIM_PHP_PREAMBLE);

        for route in routes {
            let context = json!({
                "method_lower": route.method.as_str().to_lowercase(),
                "path": route.path,
                "ack": route.method.ack(),
            });
            source.push_str(
                &self
                    .handlebars
                    .render_template(SLIM_PHP_HANDLER, &context)?,
            );
        }

        source.push_str(SLIM_PHP_TRAILER);
        Ok(source)
    }
}
