//! Per-table API files.

mod api_index;
mod table_service;
mod table_types;

pub use api_index::ApiIndex;
pub use table_service::TableService;
pub use table_types::TableTypes;
