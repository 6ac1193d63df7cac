//! Label-correcting shortest-path search with stranded-endpoint repair.

use fixedbitset::FixedBitSet;
use geo::Point;
use itertools::Itertools;

use crate::error::Error;
use crate::geometry::haversine_km;
use crate::model::{Passenger, TransitNetwork, VehicleKind};
use crate::routing::score;
use crate::StopId;

/// Edge weighting used by the relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchWeight {
    /// Composite distance/time/fare score.
    Composite,
    /// Constant 1 per edge (fewest transfers).
    Hops,
}

/// Predecessor map plus the endpoints the search actually connected.
/// The endpoints may differ from the requested ones after repair.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub predecessors: Vec<Option<StopId>>,
    pub origin: StopId,
    pub target: StopId,
}

/// Runs the relaxation, snapping a stranded origin or target onto the
/// nearest not-yet-tried stop until a path exists.
///
/// The tried-set strictly grows, so the loop terminates; exhausting it
/// means the network is empty or fully disconnected, which is a
/// configuration fault rather than a routing condition.
pub(crate) fn search_with_repair(
    network: &TransitNetwork,
    origin: StopId,
    target: StopId,
    passenger: &Passenger,
    bias: Option<VehicleKind>,
    weight: SearchWeight,
) -> Result<SearchOutcome, Error> {
    let mut tried = FixedBitSet::with_capacity(network.len());
    let mut origin = origin;
    let mut target = target;

    loop {
        let (scores, predecessors) =
            relax_to_fixed_point(network, origin, passenger, bias, weight)?;

        let origin_stranded = scores
            .iter()
            .enumerate()
            .all(|(stop, score)| stop == origin || score.is_infinite());

        if origin_stranded {
            let snapped = nearest_untried(network, network.stop(origin).geometry, &mut tried)?;
            log::debug!("origin stop {origin} reaches nothing, snapping to stop {snapped}");
            origin = snapped;
            continue;
        }

        if scores[target].is_infinite() {
            let snapped = nearest_untried(network, network.stop(target).geometry, &mut tried)?;
            log::debug!("target stop {target} is unreachable, snapping to stop {snapped}");
            target = snapped;
            continue;
        }

        return Ok(SearchOutcome {
            predecessors,
            origin,
            target,
        });
    }
}

/// One full relaxation to quiescence over every edge and transfer.
fn relax_to_fixed_point(
    network: &TransitNetwork,
    origin: StopId,
    passenger: &Passenger,
    bias: Option<VehicleKind>,
    weight: SearchWeight,
) -> Result<(Vec<f64>, Vec<Option<StopId>>), Error> {
    let n = network.len();
    let mut scores = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<StopId>> = vec![None; n];
    scores[origin] = 0.0;

    let relaxation_budget = 2 * n.saturating_sub(1);
    let mut relaxations = 0usize;

    loop {
        let mut improved = false;

        for (stop_idx, stop) in network.stops().iter().enumerate() {
            for edge in &stop.next_stops {
                let step = match weight {
                    SearchWeight::Composite => {
                        score::edge_score(edge, network.stop(edge.target).kind, passenger, bias)
                    }
                    SearchWeight::Hops => 1.0,
                };
                let candidate = scores[stop_idx] + step;
                if candidate < scores[edge.target] {
                    scores[edge.target] = candidate;
                    predecessors[edge.target] = Some(stop_idx);
                    relaxations += 1;
                    improved = true;
                }
            }

            if let Some(transfer) = &stop.transfer {
                let step = match weight {
                    SearchWeight::Composite => score::transfer_score(
                        transfer,
                        network.stop(transfer.target).kind,
                        passenger,
                        bias,
                    ),
                    SearchWeight::Hops => 1.0,
                };
                let candidate = scores[stop_idx] + step;
                if candidate < scores[transfer.target] {
                    scores[transfer.target] = candidate;
                    predecessors[transfer.target] = Some(stop_idx);
                    relaxations += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
        // Composite scores are non-negative for sane fare/time/distance
        // inputs; tripping this bound means the dataset is corrupt.
        if weight == SearchWeight::Composite && relaxations > relaxation_budget {
            return Err(Error::NegativeCycle);
        }
    }

    Ok((scores, predecessors))
}

/// Nearest stop to `reference` among those not yet tried, by
/// straight-line distance. Ties go to the lowest index. Marks the
/// chosen stop as tried.
fn nearest_untried(
    network: &TransitNetwork,
    reference: Point<f64>,
    tried: &mut FixedBitSet,
) -> Result<StopId, Error> {
    let untried: Vec<StopId> = (0..network.len()).filter(|idx| !tried.contains(*idx)).collect();
    let pos = untried
        .iter()
        .position_min_by(|&&a, &&b| {
            haversine_km(reference, network.stop(a).geometry)
                .total_cmp(&haversine_km(reference, network.stop(b).geometry))
        })
        .ok_or(Error::NetworkExhausted)?;

    let snapped = untried[pos];
    tried.insert(snapped);
    Ok(snapped)
}
