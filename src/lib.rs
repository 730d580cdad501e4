//! htmx-scaffold library
//!
//! Scans HTML markup for elements carrying HTMX trigger attributes
//! (`hx-get`, `hx-post`, `hx-put`, `hx-delete`) and renders matching route
//! scaffolding for a selected backend framework.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod backend;
pub mod error;
pub mod generator;
pub mod render;
pub mod routes;
pub mod scaffold;
pub mod templates;

pub use backend::BackendKind;
pub use error::ScaffoldError;
pub use generator::BackendGenerator;
pub use routes::{HttpMethod, RouteSpec};
pub use scaffold::{GeneratedFile, SiteScaffold};
