//! Bridge Aggregator Configuration
//!
//! Settings, configuration loading and startup logging for the bridge route
//! aggregator.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	CacheSettings, ConfigValidationError, LogFormat, LoggingSettings, PaymentSettings,
	ProviderSettings, ProvidersSettings, ServerSettings, Settings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
