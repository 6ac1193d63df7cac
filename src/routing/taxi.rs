//! Taxi-only and walking-only fallback routes.

use crate::geometry::haversine_km;
use crate::model::{Passenger, TaxiFares, VehicleKind};
use crate::routing::route_info::{RouteInfo, RouteStrategy};
use crate::TAXI_THRESHOLD_KM;

/// Builds a route that bypasses the stop graph entirely: walking for
/// short trips, a metered taxi ride otherwise. The empty path lets
/// composition and downstream consumers treat it like any other route.
pub fn taxi_only_route(passenger: &Passenger, fares: &TaxiFares) -> RouteInfo {
    let distance = haversine_km(passenger.location, passenger.target);

    if distance < TAXI_THRESHOLD_KM {
        return RouteInfo {
            path: Vec::new(),
            time_min: passenger.walking_time_min(distance),
            distance_km: distance,
            price: 0.0,
            taxi_price: 0.0,
            name: "Walking route".to_string(),
            bias: None,
            strategy: RouteStrategy::TaxiOnly,
        };
    }

    RouteInfo {
        path: Vec::new(),
        time_min: fares.travel_time_min(distance),
        distance_km: distance,
        price: fares.fare(distance),
        taxi_price: 0.0,
        name: "Taxi-only route".to_string(),
        bias: Some(VehicleKind::Taxi),
        strategy: RouteStrategy::TaxiOnly,
    }
}
