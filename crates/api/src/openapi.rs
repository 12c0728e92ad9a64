use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::root::{EndpointInfo, PaymentTerms, ServiceInfo};
use crate::handlers::{health, root, routes};
use crate::payment::{PaymentDetails, PaymentRequiredResponse};
use bridge_types::{
	AmountInput, BridgeRouteRequest, BridgeRoutesResponse, CacheStats, Chain, Confidence,
	HealthResponse, RankedRoute, RecommendedRoute, Route, RouteSummary, Token,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bridge Aggregator API",
        description = "Cross-chain bridge route aggregation over LI.FI and Socket"
    ),
    paths(
        root::root,
        health::health,
        routes::post_bridge_routes,
    ),
    components(schemas(
        BridgeRouteRequest, AmountInput, BridgeRoutesResponse, RankedRoute, Route,
        RecommendedRoute, RouteSummary, Confidence, Token, Chain,
        HealthResponse, CacheStats, ErrorResponse,
        PaymentRequiredResponse, PaymentDetails,
        ServiceInfo, EndpointInfo, PaymentTerms
    )),
    tags(
        (name = "routes", description = "Bridge route aggregation"),
        (name = "health", description = "Health and service metadata")
    )
)]
pub struct ApiDoc;
