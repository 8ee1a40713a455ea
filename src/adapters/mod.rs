// Adapters layer: concrete implementations of the domain ports (catalog
// backends and rendering backends).

pub mod catalog;
pub mod render;

pub use catalog::{HttpCatalog, InMemoryCatalog, JsonCatalog};
pub use render::{CsvRenderer, TextRenderer};
