pub mod document;
pub mod layout;
pub mod site;

pub use document::{Document, Element, ElementRegistry};
pub use site::build_site;
