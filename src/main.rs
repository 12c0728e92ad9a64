//! Bridge Aggregator Server
//!
//! Main entry point for the aggregator server

use bridge_aggregator::BridgeAggregatorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	BridgeAggregatorBuilder::new().start_server().await
}
