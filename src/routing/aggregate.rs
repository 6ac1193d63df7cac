//! Path reconstruction and aggregation.
//!
//! Walks the predecessor map back from the target and re-looks-up the
//! original edges to recover true time/distance/fare; the search's
//! composite score is a heuristic and is never reused here.

use crate::model::{Passenger, TransitNetwork, VehicleKind};
use crate::routing::relaxation::SearchOutcome;
use crate::routing::route_info::{RouteInfo, RouteStrategy};

/// Discounted total minus the per-transfer rebate, floored at zero.
pub(crate) fn rebated_price(discounted: f64, transfer_count: usize) -> f64 {
    let rebate = transfer_count as f64;
    if discounted > rebate {
        discounted - rebate
    } else {
        0.0
    }
}

/// Builds a [`RouteInfo`] from a search outcome. Taxi price and display
/// name are left for composition to fill in.
pub(crate) fn collect_route(
    network: &TransitNetwork,
    outcome: &SearchOutcome,
    passenger: &Passenger,
    bias: Option<VehicleKind>,
    strategy: RouteStrategy,
) -> RouteInfo {
    let mut path = Vec::new();
    let mut total_time = 0.0;
    let mut total_distance = 0.0;
    let mut total_fare = 0.0;
    let mut transfer_count = 0usize;

    let mut current = Some(outcome.target);
    while let Some(stop_id) = current {
        path.push(stop_id);

        if let Some(pred_id) = outcome.predecessors[stop_id] {
            let pred = network.stop(pred_id);
            let exempt = passenger.special_day && network.stop(stop_id).kind.is_fare_exempt();

            if let Some(edge) = pred.next_stops.iter().find(|e| e.target == stop_id) {
                total_time += edge.time_min;
                total_distance += edge.distance_km;
                if !exempt {
                    total_fare += edge.fare;
                }
            }

            if let Some(transfer) = &pred.transfer {
                if transfer.target == stop_id {
                    total_time += transfer.time_min;
                    if !exempt {
                        total_fare += transfer.fare;
                    }
                    transfer_count += 1;
                }
            }
        }

        current = outcome.predecessors[stop_id];
    }
    path.reverse();

    let price = rebated_price(passenger.kind.discount(total_fare), transfer_count);

    RouteInfo {
        path,
        time_min: total_time,
        distance_km: total_distance,
        price,
        taxi_price: 0.0,
        name: String::new(),
        bias,
        strategy,
    }
}
