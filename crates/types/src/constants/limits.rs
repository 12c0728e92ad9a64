//! Global limits and defaults for request validation and runtime

/// Minimum bridge amount for native/wrapped ether
pub const MIN_ETH_AMOUNT: f64 = 0.001;

/// Minimum bridge amount for every other token
pub const MIN_TOKEN_AMOUNT: f64 = 1.0;

/// Maximum bridge amount, in token units, for all tokens
pub const MAX_BRIDGE_AMOUNT: f64 = 1_000_000.0;

/// Amounts below this are "small transfers" for ranking and warnings
pub const SMALL_TRANSFER_THRESHOLD: f64 = 10.0;

/// Amounts above this trigger the liquidity warning
pub const LARGE_TRANSFER_THRESHOLD: f64 = 50_000.0;

/// Relative cost premium the fastest route may carry and still be recommended
pub const MAX_SPEED_COST_PREMIUM: f64 = 0.20;

/// Default upstream request timeout for provider quote calls
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 8_000; // 8s

/// Default time-to-live of cached route responses
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 30;

/// Default ETA when LI.FI omits the execution duration
pub const DEFAULT_LIFI_ETA_MINUTES: u64 = 15;

/// Default ETA when Socket omits the service time
pub const DEFAULT_SOCKET_ETA_MINUTES: u64 = 10;

/// Placeholder user address sent to providers that require one for quoting
pub const QUOTE_USER_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
