//! x402-style payment gate
//!
//! Only checks that the payment headers are present and describe a large
//! enough payment in the right currency. Tokens are not verified on-chain.

use axum::{
	extract::{Request, State},
	http::{HeaderMap, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
	Json,
};
use bridge_config::PaymentSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

pub const PAYMENT_TOKEN_HEADER: &str = "x-payment-token";
pub const PAYMENT_AMOUNT_HEADER: &str = "x-payment-amount";
pub const PAYMENT_CURRENCY_HEADER: &str = "x-payment-currency";
pub const PAYMENT_PROTOCOL: &str = "x402";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
	#[error("X402 payment token required")]
	MissingToken,

	#[error("Minimum payment is {amount} {currency}")]
	InsufficientAmount { amount: f64, currency: String },

	#[error("Payment must be in {currency}")]
	WrongCurrency { currency: String },
}

/// Payment terms echoed back on rejection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentDetails {
	pub amount: f64,
	pub currency: String,
	pub protocol: String,
}

/// 402 response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentRequiredResponse {
	pub error: String,
	pub message: String,
	pub payment_details: PaymentDetails,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty())
}

/// Check the payment headers against the configured terms
pub fn verify_payment(headers: &HeaderMap, terms: &PaymentSettings) -> Result<(), PaymentError> {
	if header(headers, PAYMENT_TOKEN_HEADER).is_none() {
		return Err(PaymentError::MissingToken);
	}

	let paid = header(headers, PAYMENT_AMOUNT_HEADER).and_then(|v| v.parse::<f64>().ok());
	match paid {
		Some(amount) if amount.is_finite() && amount >= terms.amount => {},
		_ => {
			return Err(PaymentError::InsufficientAmount {
				amount: terms.amount,
				currency: terms.currency.clone(),
			})
		},
	}

	let currency_ok = header(headers, PAYMENT_CURRENCY_HEADER)
		.is_some_and(|currency| currency.eq_ignore_ascii_case(&terms.currency));
	if !currency_ok {
		return Err(PaymentError::WrongCurrency {
			currency: terms.currency.clone(),
		});
	}

	Ok(())
}

/// Middleware rejecting unpaid requests with 402
pub async fn require_payment(
	State(state): State<AppState>,
	request: Request,
	next: Next,
) -> Response {
	if !state.payment.enabled {
		return next.run(request).await;
	}

	match verify_payment(request.headers(), &state.payment) {
		Ok(()) => {
			info!(
				"X402 payment accepted: {} {}",
				header(request.headers(), PAYMENT_AMOUNT_HEADER).unwrap_or("-"),
				state.payment.currency
			);
			next.run(request).await
		},
		Err(e) => {
			debug!("Rejecting unpaid request: {}", e);
			let body = PaymentRequiredResponse {
				error: "Payment Required".to_string(),
				message: e.to_string(),
				payment_details: PaymentDetails {
					amount: state.payment.amount,
					currency: state.payment.currency.clone(),
					protocol: PAYMENT_PROTOCOL.to_string(),
				},
			};
			(StatusCode::PAYMENT_REQUIRED, Json(body)).into_response()
		},
	}
}
