//! Platform-agnostic building blocks: datasets, aggregation, formatting and selection.

pub mod aggregate;
pub mod format;
pub mod selection;
pub mod store;
