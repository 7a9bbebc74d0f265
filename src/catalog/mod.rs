pub mod attributes;
pub mod display;
pub mod filter;
pub mod images;
pub mod pricing;
pub mod store;

pub use display::DisplayRow;
pub use filter::{FilterSpec, SortBy, SortOrder};
pub use pricing::StockStatus;
pub use store::CatalogStore;
