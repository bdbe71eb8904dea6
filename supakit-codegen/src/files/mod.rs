//! Individual generated files, grouped by the generator that emits them.

pub mod api;
pub mod stripe;
pub mod workspace;
