//! Composite edge scoring for the search.
//!
//! The score is a planning heuristic only; real time/distance/fare are
//! recovered from the original edges during path aggregation.

use crate::model::{NextStop, Passenger, Transfer, VehicleKind};

const DISTANCE_WEIGHT: f64 = 0.1;
const TIME_WEIGHT: f64 = 0.5;
const FARE_WEIGHT: f64 = 0.4;
/// Strong multiplicative preference, not a hard filter.
const BIAS_FACTOR: f64 = 0.01;

/// Score of a traveled edge, given the mode of its destination stop.
pub(crate) fn edge_score(
    edge: &NextStop,
    dest_kind: VehicleKind,
    passenger: &Passenger,
    bias: Option<VehicleKind>,
) -> f64 {
    let mut score = DISTANCE_WEIGHT * edge.distance_km + TIME_WEIGHT * edge.time_min;
    if !(passenger.special_day && dest_kind.is_fare_exempt()) {
        score += FARE_WEIGHT * passenger.kind.discount(edge.fare);
    }
    if bias == Some(dest_kind) {
        score *= BIAS_FACTOR;
    }
    score
}

/// Score of a transfer edge. Transfers have no meaningful distance, so
/// the distance term is intentionally absent.
pub(crate) fn transfer_score(
    transfer: &Transfer,
    dest_kind: VehicleKind,
    passenger: &Passenger,
    bias: Option<VehicleKind>,
) -> f64 {
    let mut score = TIME_WEIGHT * transfer.time_min;
    if !(passenger.special_day && dest_kind.is_fare_exempt()) {
        score += FARE_WEIGHT * passenger.kind.discount(transfer.fare);
    }
    if bias == Some(dest_kind) {
        score *= BIAS_FACTOR;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PassengerKind;
    use geo::Point;

    fn edge(distance_km: f64, time_min: f64, fare: f64) -> NextStop {
        NextStop {
            target: 0,
            distance_km,
            time_min,
            fare,
        }
    }

    fn passenger() -> Passenger {
        let p = Point::new(29.95, 40.78);
        Passenger::new(PassengerKind::General, p, p)
    }

    #[test]
    fn base_score_blends_distance_time_fare() {
        let s = edge_score(&edge(2.0, 5.0, 4.0), VehicleKind::Bus, &passenger(), None);
        assert!((s - (0.2 + 2.5 + 1.6)).abs() < 1e-12);
    }

    #[test]
    fn special_day_waives_fare_for_exempt_modes() {
        let mut p = passenger();
        p.special_day = true;
        let s = edge_score(&edge(2.0, 5.0, 4.0), VehicleKind::Bus, &p, None);
        assert!((s - (0.2 + 2.5)).abs() < 1e-12);
        // Non-exempt destination still pays.
        let s = edge_score(&edge(2.0, 5.0, 4.0), VehicleKind::Taxi, &p, None);
        assert!((s - (0.2 + 2.5 + 1.6)).abs() < 1e-12);
    }

    #[test]
    fn bias_scales_the_whole_score() {
        let unbiased = edge_score(&edge(2.0, 5.0, 4.0), VehicleKind::Tram, &passenger(), None);
        let biased = edge_score(
            &edge(2.0, 5.0, 4.0),
            VehicleKind::Tram,
            &passenger(),
            Some(VehicleKind::Tram),
        );
        assert!((biased - unbiased * 0.01).abs() < 1e-12);
    }

    #[test]
    fn transfer_score_has_no_distance_term() {
        let transfer = Transfer {
            target: 0,
            time_min: 6.0,
            fare: 1.0,
        };
        let s = transfer_score(&transfer, VehicleKind::Bus, &passenger(), None);
        assert!((s - (3.0 + 0.4)).abs() < 1e-12);
    }

    #[test]
    fn discount_feeds_the_fare_term() {
        let mut p = passenger();
        p.kind = PassengerKind::Elderly;
        let s = edge_score(&edge(2.0, 5.0, 4.0), VehicleKind::Bus, &p, None);
        assert!((s - (0.2 + 2.5)).abs() < 1e-12);
    }
}
