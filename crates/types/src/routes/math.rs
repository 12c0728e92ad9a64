//! Numeric helpers for route figures

/// Round `value` to `places` decimal digits, half away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
	let factor = 10f64.powi(places as i32);
	(value * factor).round() / factor
}
