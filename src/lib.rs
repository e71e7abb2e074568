//! aerosort - Pluggable string comparison strategies for deterministic query ordering
//!
//! The ordering subsystem decides how text-typed dimension values sort during
//! query planning, execution, and result merging, and contributes a stable
//! byte discriminant to query-plan cache keys.

pub mod ordering;

pub use ordering::{OrderingError, OrderingResult, StringComparator};
