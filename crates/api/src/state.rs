use std::sync::Arc;

use bridge_config::PaymentSettings;
use bridge_service::RouteServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub route_service: Arc<dyn RouteServiceTrait>,
	pub payment: Arc<PaymentSettings>,
}

impl AppState {
	pub fn new(route_service: Arc<dyn RouteServiceTrait>, payment: PaymentSettings) -> Self {
		Self {
			route_service,
			payment: Arc::new(payment),
		}
	}
}
