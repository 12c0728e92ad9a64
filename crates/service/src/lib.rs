//! Bridge Service
//!
//! Core logic for route aggregation, ranking and caching.

pub mod aggregator;
pub mod optimizer;
pub mod routes;

pub use aggregator::{dedupe_routes, RouteAggregator};
pub use optimizer::{optimize, summarize, warnings, OptimizedRoutes};
pub use routes::{RouteService, RouteServiceError, RouteServiceTrait};

#[cfg(any(test, feature = "test-utils"))]
pub use routes::MockRouteServiceTrait;
