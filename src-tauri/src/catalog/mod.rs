//! Static procedure catalog: data model, embedded loader, and the pure
//! filter/group engine the portfolio view is built on.

pub mod filter;
pub mod loader;
pub mod types;

pub use filter::{distinct_labels, filter_procedures, group_by_view, price_bounds, time_bounds};
pub use loader::CatalogState;
pub use types::{Classification, Consumable, FilterState, Procedure, ProcedureGroup, ViewMode};
