//! Centralized mocks and fixtures for testing
//!
//! Reusable providers, settings and request fixtures shared by the
//! integration tests.

pub mod api_fixtures;
pub mod providers;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use api_fixtures::ApiFixtures;
#[allow(unused_imports)]
pub use providers::MockProvider;
#[allow(unused_imports)]
pub use test_server::TestServer;
