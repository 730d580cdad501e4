//! Flask-style renderer

use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde_json::json;

use super::BackendRenderer;
use crate::error::ScaffoldError;
use crate::routes::RouteSpec;
use crate::templates::{FLASK_HANDLER, FLASK_PREAMBLE, FLASK_TRAILER};

/// Renders a Python Flask application.
pub struct FlaskRenderer {
    handlebars: Handlebars<'static>,
}

impl FlaskRenderer {
    /// Create the renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }
}

impl Default for FlaskRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRenderer for FlaskRenderer {
    fn render(&self, routes: &[RouteSpec]) -> Result<String, ScaffoldError> {
        let mut source = String::from(FLASK_PREAMBLE);

        for route in routes {
            let context = json!({
                "method": route.method,
                "path": route.path,
                "handler_name": handler_name(route),
                "ack": route.method.ack(),
            });
            source.push_str(&self.handlebars.render_template(FLASK_HANDLER, &context)?);
        }

        source.push_str(FLASK_TRAILER);
        Ok(source)
    }
}

/// Function name for a route's handler, from the method and path slug.
fn handler_name(route: &RouteSpec) -> String {
    let method = route.method.as_str().to_lowercase();
    let slug = route.path.to_case(Case::Snake);
    if slug.is_empty() {
        format!("{method}_index")
    } else {
        format!("{method}_{slug}")
    }
}
