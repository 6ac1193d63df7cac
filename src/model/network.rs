//! The stop/transfer graph shared read-only across planning requests.

use geo::Point;
use hashbrown::HashMap;

use crate::error::Error;
use crate::model::vehicle::VehicleKind;
use crate::StopId;

/// Directed travel edge to another stop.
#[derive(Debug, Clone, PartialEq)]
pub struct NextStop {
    pub target: StopId,
    pub distance_km: f64,
    pub time_min: f64,
    pub fare: f64,
}

/// Same-location mode change to another stop. At most one per stop;
/// distinct from a traveled edge, so it carries no distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub target: StopId,
    pub time_min: f64,
    pub fare: f64,
}

/// A named, located node in the transit graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Raw identifier from the dataset, unique within a network.
    pub stop_id: String,
    pub name: String,
    pub kind: VehicleKind,
    /// `x = lon, y = lat`.
    pub geometry: Point<f64>,
    pub is_terminal: bool,
    pub next_stops: Vec<NextStop>,
    pub transfer: Option<Transfer>,
}

/// Immutable stop table with an id-interning index.
///
/// Stops are addressed by [`StopId`] (their position in the table);
/// every edge and transfer target is validated on construction.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    stops: Vec<Stop>,
    id_index: HashMap<String, StopId>,
}

impl TransitNetwork {
    pub fn new(stops: Vec<Stop>) -> Result<Self, Error> {
        let mut id_index = HashMap::with_capacity(stops.len());
        for (idx, stop) in stops.iter().enumerate() {
            if id_index.insert(stop.stop_id.clone(), idx).is_some() {
                return Err(Error::InvalidData(format!(
                    "duplicate stop id {:?}",
                    stop.stop_id
                )));
            }
        }

        for stop in &stops {
            for edge in &stop.next_stops {
                if edge.target >= stops.len() {
                    return Err(Error::InvalidData(format!(
                        "edge target {} out of bounds at stop {:?}",
                        edge.target, stop.stop_id
                    )));
                }
            }
            if let Some(transfer) = &stop.transfer {
                if transfer.target >= stops.len() {
                    return Err(Error::InvalidData(format!(
                        "transfer target {} out of bounds at stop {:?}",
                        transfer.target, stop.stop_id
                    )));
                }
            }
        }

        Ok(Self { stops, id_index })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id]
    }

    /// Resolves a raw dataset id to its index.
    pub fn index_of(&self, raw_id: &str) -> Option<StopId> {
        self.id_index.get(raw_id).copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, kind: VehicleKind) -> Stop {
        Stop {
            stop_id: id.to_string(),
            name: id.to_string(),
            kind,
            geometry: Point::new(29.95, 40.78),
            is_terminal: false,
            next_stops: Vec::new(),
            transfer: None,
        }
    }

    #[test]
    fn interns_ids_in_order() {
        let network = TransitNetwork::new(vec![
            stop("bus_1", VehicleKind::Bus),
            stop("tram_1", VehicleKind::Tram),
        ])
        .unwrap();
        assert_eq!(network.index_of("bus_1"), Some(0));
        assert_eq!(network.index_of("tram_1"), Some(1));
        assert_eq!(network.index_of("missing"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = TransitNetwork::new(vec![
            stop("bus_1", VehicleKind::Bus),
            stop("bus_1", VehicleKind::Bus),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rejects_dangling_edge_target() {
        let mut a = stop("a", VehicleKind::Bus);
        a.next_stops.push(NextStop {
            target: 7,
            distance_km: 1.0,
            time_min: 1.0,
            fare: 1.0,
        });
        let err = TransitNetwork::new(vec![a]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rejects_dangling_transfer_target() {
        let mut a = stop("a", VehicleKind::Bus);
        a.transfer = Some(Transfer {
            target: 3,
            time_min: 2.0,
            fare: 0.5,
        });
        let err = TransitNetwork::new(vec![a]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
