//! Route ranking, recommendation and user-facing warnings

use bridge_types::constants::limits::{
	LARGE_TRANSFER_THRESHOLD, MAX_SPEED_COST_PREMIUM, SMALL_TRANSFER_THRESHOLD,
};
use bridge_types::{RankedRoute, RecommendedRoute, Route, RouteSummary};

pub const REASON_CHEAPEST: &str = "Lowest total cost with acceptable speed";
pub const REASON_BALANCED: &str = "Best balance of speed and cost";
pub const REASON_SMALL_TRANSFER: &str = "Fastest option for small transfer";

/// Ranked routes plus the pick we suggest to the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptimizedRoutes {
	pub routes: Vec<RankedRoute>,
	pub recommended_route: Option<RecommendedRoute>,
	pub summary: Option<RouteSummary>,
}

/// Rank `routes` by total cost and choose a recommendation
///
/// The cheapest route is the default. A route at least twice as fast that
/// costs under 20% more wins instead, and for transfers below 10 units the
/// fastest route always wins.
pub fn optimize(routes: Vec<Route>, amount: f64) -> OptimizedRoutes {
	// first minimum in provider order
	let Some(fastest) = routes.iter().min_by_key(|r| r.eta_minutes).cloned() else {
		return OptimizedRoutes::default();
	};

	let mut sorted = routes;
	sorted.sort_by(|a, b| a.total_cost_usd.total_cmp(&b.total_cost_usd));
	let cheapest = &sorted[0];

	let mut recommended = cheapest;
	let mut reason = REASON_CHEAPEST;

	let differs = fastest.bridge_name != cheapest.bridge_name;

	// a free or negative-cost cheapest route has no meaningful relative premium
	if differs && cheapest.total_cost_usd > 0.0 {
		let premium =
			(fastest.total_cost_usd - cheapest.total_cost_usd) / cheapest.total_cost_usd;
		if premium < MAX_SPEED_COST_PREMIUM
			&& (fastest.eta_minutes as f64) < cheapest.eta_minutes as f64 / 2.0
		{
			recommended = &fastest;
			reason = REASON_BALANCED;
		}
	}

	if amount < SMALL_TRANSFER_THRESHOLD && differs {
		recommended = &fastest;
		reason = REASON_SMALL_TRANSFER;
	}

	let recommended_route = RecommendedRoute {
		bridge_name: recommended.bridge_name.clone(),
		reason: reason.to_string(),
	};

	let ranked: Vec<RankedRoute> = sorted
		.into_iter()
		.enumerate()
		.map(|(index, route)| RankedRoute {
			rank: index + 1,
			route,
		})
		.collect();

	OptimizedRoutes {
		summary: summarize(&ranked),
		routes: ranked,
		recommended_route: Some(recommended_route),
	}
}

/// Headline figures for a ranked, cost-sorted route list
pub fn summarize(ranked: &[RankedRoute]) -> Option<RouteSummary> {
	let cheapest = &ranked.first()?.route;
	let fastest_eta = ranked.iter().map(|r| r.route.eta_minutes).min()?;

	Some(RouteSummary {
		total_routes_found: ranked.len(),
		best_fee: format!("${}", cheapest.total_cost_usd),
		fastest_eta: format!("{} minutes", fastest_eta),
		cheapest_bridge: cheapest.bridge_name.clone(),
	})
}

/// Advisory notes attached to every response
pub fn warnings(amount: f64) -> Vec<String> {
	let mut warnings = vec![
		"Always verify bridge contracts before approving tokens".to_string(),
		"Bridge times are estimates and may vary with network congestion".to_string(),
	];

	if amount < SMALL_TRANSFER_THRESHOLD {
		warnings.push(
			"For small amounts, bridge fees may be a significant percentage of your transfer"
				.to_string(),
		);
	}
	if amount > LARGE_TRANSFER_THRESHOLD {
		warnings.push(
			"For large amounts, consider splitting into multiple transfers or verify bridge liquidity"
				.to_string(),
		);
	}

	warnings
}
