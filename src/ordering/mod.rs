//! String ordering subsystem for aerosort
//!
//! Six pluggable total-ordering strategies over optional text values,
//! resolved by persisted name at plan construction time and invoked by the
//! executor during sort/merge/group operations.
//!
//! # Design Principles
//!
//! - Deterministic: every strategy is a total order; same inputs, same sign
//! - Null-minimal: null sorts before any non-null value in every strategy
//! - Stateless: strategies are zero-sized `Copy` singletons, safe to share
//!   across threads without synchronization
//! - Cache-stable: each strategy exposes a fixed one-byte discriminant that
//!   external callers concatenate into query-plan fingerprints

mod alphanumeric;
mod comparator;
mod digits;
mod errors;
mod numeric;
pub mod registry;
mod version;

pub use comparator::StringComparator;
pub use errors::{OrderingError, OrderingResult};
pub use registry::{
    ALPHANUMERIC_NAME, LEXICOGRAPHIC_NAME, NATURAL_NAME, NUMERIC_NAME, STRLEN_NAME, VERSION_NAME,
};
