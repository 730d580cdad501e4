//! Trigger-attribute scanning and route resolution
//!
//! The scanner walks a parsed document in document order and collects every
//! element that carries at least one usable trigger attribute. The resolver
//! turns one matched element into exactly one [`RouteSpec`] by fixed method
//! precedence.

use std::fmt;

use scraper::{ElementRef, Html};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// HTTP methods declarable through HTMX trigger attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET request (`hx-get`)
    Get,
    /// POST request (`hx-post`)
    Post,
    /// PUT request (`hx-put`)
    Put,
    /// DELETE request (`hx-delete`)
    Delete,
}

impl HttpMethod {
    /// Resolution precedence. The first method whose attribute is present
    /// on an element determines its route; later ones are ignored.
    pub const PRECEDENCE: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// The markup attribute declaring a request with this method.
    #[must_use]
    pub const fn trigger_attr(self) -> &'static str {
        match self {
            Self::Get => "hx-get",
            Self::Post => "hx-post",
            Self::Put => "hx-put",
            Self::Delete => "hx-delete",
        }
    }

    /// Uppercase label as it appears in generated code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Fixed acknowledgement string returned by generated handlers.
    #[must_use]
    pub const fn ack(self) -> &'static str {
        match self {
            Self::Get => "GET request received",
            Self::Post => "POST request received",
            Self::Put => "PUT request received",
            Self::Delete => "DELETE request received",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A resolved route: one HTTP method and one target path.
///
/// Created once per matched element, in document order, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    /// Method derived from the winning trigger attribute.
    pub method: HttpMethod,
    /// Path taken from that attribute's value.
    pub path: String,
}

/// Non-empty value of the given method's trigger attribute.
///
/// An attribute that is present but empty counts as absent: `hx-get=""`
/// declares nothing.
fn trigger_value(element: ElementRef<'_>, method: HttpMethod) -> Option<&str> {
    element
        .value()
        .attr(method.trigger_attr())
        .filter(|value| !value.is_empty())
}

/// Whether an element carries at least one usable trigger attribute.
fn is_interactive(element: ElementRef<'_>) -> bool {
    HttpMethod::PRECEDENCE
        .iter()
        .any(|&method| trigger_value(element, method).is_some())
}

/// Collect the matched elements of a parsed document, in document order.
///
/// Each element appears at most once. An empty document yields an empty
/// sequence, not an error.
#[must_use]
pub fn scan_document(document: &Html) -> Vec<ElementRef<'_>> {
    let elements: Vec<_> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| is_interactive(*element))
        .collect();
    debug!(count = elements.len(), "matched interactive elements");
    elements
}

/// Resolve one matched element to its route.
///
/// Fixed precedence GET, POST, PUT, DELETE: an element declaring several
/// methods still yields exactly one route. Returns `None` for elements with
/// no usable trigger attribute.
#[must_use]
pub fn resolve_route(element: ElementRef<'_>) -> Option<RouteSpec> {
    HttpMethod::PRECEDENCE.iter().find_map(|&method| {
        trigger_value(element, method).map(|path| {
            trace!(%method, path, "resolved route");
            RouteSpec {
                method,
                path: path.to_string(),
            }
        })
    })
}

/// Parse markup and produce the full route sequence in document order.
#[must_use]
pub fn extract_routes(markup: &str) -> Vec<RouteSpec> {
    let document = Html::parse_document(markup);
    scan_document(&document)
        .into_iter()
        .filter_map(resolve_route)
        .collect()
}
