//! Named templates and fixed site assets

pub mod backends;
pub mod site;

pub use backends::*;
pub use site::*;
