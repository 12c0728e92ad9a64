//! Bridge Storage
//!
//! Short-lived memoization of aggregated route responses.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryCache;
pub use traits::RouteCache;
