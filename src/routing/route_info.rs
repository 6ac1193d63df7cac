//! The priced, timed itinerary produced by a planning request.

use crate::model::{Stop, TransitNetwork, VehicleKind};
use crate::StopId;

/// Which search produced a route. Stored on the result so composition
/// can re-invoke the same search when the endpoints change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStrategy {
    /// Minimizes the composite distance/time/fare score.
    CompositeScore,
    /// Minimizes the number of traversed edges.
    LeastHops,
    /// Bypasses the stop graph entirely.
    TaxiOnly,
}

/// A complete itinerary: the transit stop sequence (possibly empty for
/// taxi-only or walking-only trips) plus aggregated time, distance and
/// price, with the taxi portion tracked separately.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub path: Vec<StopId>,
    pub time_min: f64,
    pub distance_km: f64,
    pub price: f64,
    /// Price of first/last-mile taxi legs, already included in `price`.
    pub taxi_price: f64,
    pub name: String,
    pub bias: Option<VehicleKind>,
    pub strategy: RouteStrategy,
}

impl RouteInfo {
    /// Whether the itinerary contains a transit segment.
    pub fn has_transit_leg(&self) -> bool {
        !self.path.is_empty()
    }

    /// Resolves the stop sequence against the network it was planned on.
    pub fn stops<'a>(&'a self, network: &'a TransitNetwork) -> impl Iterator<Item = &'a Stop> {
        self.path.iter().map(|&id| network.stop(id))
    }
}
