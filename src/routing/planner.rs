//! Itinerary composition: endpoint snapping, search dispatch and
//! first/last-mile bridging.

use geo::Point;
use itertools::Itertools;
use rayon::prelude::*;

use crate::error::Error;
use crate::geometry::haversine_km;
use crate::model::{Passenger, TaxiFares, TransitNetwork, VehicleKind};
use crate::routing::relaxation::{search_with_repair, SearchWeight};
use crate::routing::route_info::{RouteInfo, RouteStrategy};
use crate::routing::{aggregate, taxi};
use crate::{StopId, TAXI_THRESHOLD_KM};

/// One first/last-mile gap, priced either as a taxi ride or as free
/// walking depending on the threshold.
struct GapLeg {
    taxi_price: f64,
    taxi_time_min: f64,
    walking_time_min: f64,
}

/// Plans complete itineraries over a shared read-only network.
pub struct RoutePlanner {
    network: TransitNetwork,
    taxi: TaxiFares,
}

impl RoutePlanner {
    pub fn new(network: TransitNetwork, taxi: TaxiFares) -> Self {
        Self { network, taxi }
    }

    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    pub fn taxi_fares(&self) -> &TaxiFares {
        &self.taxi
    }

    /// Nearest stop to a point by straight-line distance, linear scan.
    /// Ties go to the first stop in table order.
    pub fn nearest_stop(&self, point: Point<f64>) -> Result<StopId, Error> {
        self.network
            .stops()
            .iter()
            .position_min_by(|a, b| {
                haversine_km(point, a.geometry).total_cmp(&haversine_km(point, b.geometry))
            })
            .ok_or(Error::NoPointsFound)
    }

    /// Produces a complete itinerary: snaps both endpoints to their
    /// nearest stops, runs the requested search, then bridges the gaps
    /// between the passenger's actual locations and the path ends.
    ///
    /// Routes without a transit segment (the taxi-only fallback) are
    /// returned unchanged and keep the name the fallback assigned.
    pub fn finalize_routes(
        &self,
        passenger: &Passenger,
        target: Point<f64>,
        bias: Option<VehicleKind>,
        strategy: RouteStrategy,
        name: &str,
    ) -> Result<RouteInfo, Error> {
        let origin_stop = self.nearest_stop(passenger.location)?;
        let target_stop = self.nearest_stop(target)?;

        let mut route = self.run_strategy(strategy, origin_stop, target_stop, passenger, bias)?;
        if !route.has_transit_leg() {
            return Ok(route);
        }

        let first = self.network.stop(route.path[0]);
        let last = self.network.stop(route.path[route.path.len() - 1]);

        let access_gap = haversine_km(passenger.location, first.geometry);
        let egress_gap = haversine_km(target, last.geometry);

        let access = self.bridge_gap(passenger, access_gap);
        let egress = self.bridge_gap(passenger, egress_gap);

        let taxi_price = access.taxi_price + egress.taxi_price;
        route.taxi_price = taxi_price;
        route.price += taxi_price;
        route.time_min += access.taxi_time_min
            + egress.taxi_time_min
            + access.walking_time_min
            + egress.walking_time_min;
        route.distance_km += access_gap + egress_gap;
        route.name = name.to_string();

        log::debug!(
            "finalized {:?} route: {} stops, {:.2} km, {:.2} min",
            strategy,
            route.path.len(),
            route.distance_km,
            route.time_min
        );
        Ok(route)
    }

    /// The standard alternative set for one planning request, computed
    /// in parallel over the shared immutable network.
    pub fn plan_alternatives(&self, passenger: &Passenger) -> Result<Vec<RouteInfo>, Error> {
        let requests: [(&str, Option<VehicleKind>, RouteStrategy); 5] = [
            ("Fastest route", None, RouteStrategy::CompositeScore),
            (
                "Bus-heavy route",
                Some(VehicleKind::Bus),
                RouteStrategy::CompositeScore,
            ),
            (
                "Tram-heavy route",
                Some(VehicleKind::Tram),
                RouteStrategy::CompositeScore,
            ),
            ("Fewest transfers", None, RouteStrategy::LeastHops),
            (
                "Taxi-only trip",
                Some(VehicleKind::Taxi),
                RouteStrategy::TaxiOnly,
            ),
        ];

        requests
            .into_par_iter()
            .map(|(name, bias, strategy)| {
                self.finalize_routes(passenger, passenger.target, bias, strategy, name)
            })
            .collect()
    }

    fn run_strategy(
        &self,
        strategy: RouteStrategy,
        origin: StopId,
        target: StopId,
        passenger: &Passenger,
        bias: Option<VehicleKind>,
    ) -> Result<RouteInfo, Error> {
        match strategy {
            RouteStrategy::CompositeScore | RouteStrategy::LeastHops => {
                let weight = if strategy == RouteStrategy::CompositeScore {
                    SearchWeight::Composite
                } else {
                    SearchWeight::Hops
                };
                let outcome =
                    search_with_repair(&self.network, origin, target, passenger, bias, weight)?;
                Ok(aggregate::collect_route(
                    &self.network,
                    &outcome,
                    passenger,
                    bias,
                    strategy,
                ))
            }
            RouteStrategy::TaxiOnly => Ok(taxi::taxi_only_route(passenger, &self.taxi)),
        }
    }

    fn bridge_gap(&self, passenger: &Passenger, gap_km: f64) -> GapLeg {
        if gap_km > TAXI_THRESHOLD_KM {
            GapLeg {
                taxi_price: self.taxi.fare(gap_km),
                taxi_time_min: self.taxi.travel_time_min(gap_km),
                walking_time_min: 0.0,
            }
        } else {
            GapLeg {
                taxi_price: 0.0,
                taxi_time_min: 0.0,
                walking_time_min: passenger.walking_time_min(gap_km),
            }
        }
    }
}
