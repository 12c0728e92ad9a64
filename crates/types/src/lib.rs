//! Bridge Types
//!
//! Shared models and traits for the bridge route aggregator: the chain and
//! token registry, the canonical route model, request validation and the
//! provider adapter trait.

pub mod bridges;
pub mod cache;
pub mod constants;
pub mod providers;
pub mod registry;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use cache::{CacheKey, CacheStats};
pub use providers::{BridgeProvider, ProviderError, ProviderInfo, ProviderResult};
pub use registry::{
	Chain, RegistryError, RegistryResult, Token, SUPPORTED_CHAINS, SUPPORTED_TOKENS,
};
pub use requests::{AmountInput, BridgeRouteRequest, RouteQuery, RouteValidationError};
pub use responses::{BridgeRoutesResponse, HealthResponse};
pub use routes::{
	Confidence, QuoteFigures, RankedRoute, RecommendedRoute, Route, RouteError, RouteSummary,
};
