pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use error::{CatalogError, CatalogResult};
