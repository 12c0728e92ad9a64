pub mod common;
pub mod health;
pub mod root;
pub mod routes;

pub use health::health;
pub use root::root;
pub use routes::post_bridge_routes;
