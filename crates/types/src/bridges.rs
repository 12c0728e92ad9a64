//! Static bridge metadata: display names, links, reputation tiers and
//! requirement notes.

use crate::registry::{Chain, Token};
use crate::routes::Confidence;

/// Link reported for bridges missing from the metadata table
pub const UNKNOWN_BRIDGE_URL: &str = "https://unknown-bridge.com";

struct BridgeMetadata {
	key: &'static str,
	name: &'static str,
	url: &'static str,
	confidence: Confidence,
}

const BRIDGES: &[BridgeMetadata] = &[
	BridgeMetadata {
		key: "across",
		name: "Across Protocol",
		url: "https://across.to",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "across-protocol",
		name: "Across Protocol",
		url: "https://across.to",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "stargate",
		name: "Stargate",
		url: "https://stargate.finance",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "connext",
		name: "Connext",
		url: "https://bridge.connext.network",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "hop",
		name: "Hop Protocol",
		url: "https://hop.exchange",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "celer",
		name: "Celer cBridge",
		url: "https://cbridge.celer.network",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "hyphen",
		name: "Hyphen",
		url: "https://hyphen.biconomy.io",
		confidence: Confidence::Medium,
	},
	BridgeMetadata {
		key: "polygon-bridge",
		name: "Polygon Bridge",
		url: "https://wallet.polygon.technology/bridge",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "arbitrum-bridge",
		name: "Arbitrum Bridge",
		url: "https://bridge.arbitrum.io",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "optimism-bridge",
		name: "Optimism Bridge",
		url: "https://app.optimism.io/bridge",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "base-bridge",
		name: "Base Bridge",
		url: "https://bridge.base.org",
		confidence: Confidence::High,
	},
	BridgeMetadata {
		key: "synapse",
		name: "Synapse",
		url: "https://synapseprotocol.com",
		confidence: Confidence::Medium,
	},
	BridgeMetadata {
		key: "multichain",
		name: "Multichain",
		url: "https://multichain.org",
		confidence: Confidence::Low,
	},
	BridgeMetadata {
		key: "allbridge",
		name: "Allbridge",
		url: "https://allbridge.io",
		confidence: Confidence::Medium,
	},
	BridgeMetadata {
		key: "wormhole",
		name: "Wormhole",
		url: "https://wormhole.com",
		confidence: Confidence::High,
	},
];

/// Lowercase the provider's bridge name and collapse whitespace runs to `-`
fn metadata_key(bridge_name: &str) -> String {
	bridge_name
		.to_lowercase()
		.split_whitespace()
		.collect::<Vec<_>>()
		.join("-")
}

fn lookup(bridge_name: &str) -> Option<&'static BridgeMetadata> {
	let key = metadata_key(bridge_name);
	BRIDGES.iter().find(|meta| meta.key == key)
}

/// Canonical display name, or the provider's name unchanged when unknown
pub fn format_bridge_name(bridge_name: &str) -> String {
	lookup(bridge_name)
		.map(|meta| meta.name.to_string())
		.unwrap_or_else(|| bridge_name.to_string())
}

pub fn bridge_url(bridge_name: &str) -> &'static str {
	lookup(bridge_name)
		.map(|meta| meta.url)
		.unwrap_or(UNKNOWN_BRIDGE_URL)
}

/// Reputation tier; bridges missing from the table are MEDIUM
pub fn bridge_confidence(bridge_name: &str) -> Confidence {
	lookup(bridge_name)
		.map(|meta| meta.confidence)
		.unwrap_or(Confidence::Medium)
}

/// Human-readable prerequisites for bridging `token` from `from` to `to`
pub fn bridge_requirements(bridge_name: &str, token: Token, from: Chain, to: Chain) -> Vec<String> {
	let mut requirements = vec![
		format!("{} for gas on {}", from.gas_token(), from.display_name()),
		format!("Will receive {} on {}", token, to.display_name()),
	];

	if bridge_name.to_lowercase().contains("stargate") {
		requirements.push("STG tokens recommended for lower fees".to_string());
	}

	requirements
}
