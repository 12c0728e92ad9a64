//! Bridge API
//!
//! Axum-based API with routes and middleware for the bridge route aggregator.

pub mod handlers;
pub mod payment;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
