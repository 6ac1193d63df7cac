//! Loads the stop network and taxi fare parameters from a JSON dataset.
//!
//! Raw serde records are kept separate from the resolved model: string
//! stop ids are interned into indices here, so the routing core never
//! sees an unresolved reference.

use std::path::Path;

use geo::Point;
use hashbrown::HashMap;
use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::model::{NextStop, Stop, TaxiFares, Transfer, TransitNetwork, VehicleKind};
use crate::StopId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    stops: Vec<RawStop>,
    taxi: RawTaxi,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStop {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: VehicleKind,
    lat: f64,
    lon: f64,
    #[serde(default)]
    is_terminal: bool,
    #[serde(default)]
    next_stops: Vec<RawNextStop>,
    #[serde(default)]
    transfer: Option<RawTransfer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNextStop {
    stop_id: String,
    distance_km: f64,
    time_min: f64,
    fare: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransfer {
    stop_id: String,
    time_min: f64,
    fare: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTaxi {
    opening_fee: f64,
    cost_per_km: f64,
}

/// Parses a dataset from its JSON text.
pub fn load_dataset_str(json: &str) -> Result<(TransitNetwork, TaxiFares), Error> {
    let raw: RawDataset = serde_json::from_str(json)?;

    let mut id_index: HashMap<&str, StopId> = HashMap::with_capacity(raw.stops.len());
    for (idx, stop) in raw.stops.iter().enumerate() {
        if id_index.insert(stop.id.as_str(), idx).is_some() {
            return Err(Error::InvalidData(format!("duplicate stop id {:?}", stop.id)));
        }
    }

    let resolve = |raw_id: &str| -> Result<StopId, Error> {
        id_index
            .get(raw_id)
            .copied()
            .ok_or_else(|| Error::UnknownStop(raw_id.to_string()))
    };

    let mut stops = Vec::with_capacity(raw.stops.len());
    for raw_stop in &raw.stops {
        let next_stops = raw_stop
            .next_stops
            .iter()
            .map(|edge| {
                Ok(NextStop {
                    target: resolve(&edge.stop_id)?,
                    distance_km: edge.distance_km,
                    time_min: edge.time_min,
                    fare: edge.fare,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let transfer = raw_stop
            .transfer
            .as_ref()
            .map(|t| {
                Ok::<_, Error>(Transfer {
                    target: resolve(&t.stop_id)?,
                    time_min: t.time_min,
                    fare: t.fare,
                })
            })
            .transpose()?;

        stops.push(Stop {
            stop_id: raw_stop.id.clone(),
            name: raw_stop.name.clone(),
            kind: raw_stop.kind,
            geometry: Point::new(raw_stop.lon, raw_stop.lat),
            is_terminal: raw_stop.is_terminal,
            next_stops,
            transfer,
        });
    }

    let network = TransitNetwork::new(stops)?;
    let fares = TaxiFares::new(raw.taxi.opening_fee, raw.taxi.cost_per_km);

    info!("Loaded {} stops from dataset", network.len());
    Ok((network, fares))
}

/// Reads and parses a dataset file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<(TransitNetwork, TaxiFares), Error> {
    let json = std::fs::read_to_string(path)?;
    load_dataset_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "stops": [
            {
                "id": "bus_1",
                "name": "Center",
                "type": "bus",
                "lat": 40.78,
                "lon": 29.95,
                "nextStops": [
                    { "stopId": "tram_1", "distanceKm": 1.2, "timeMin": 4.0, "fare": 2.5 }
                ],
                "transfer": { "stopId": "tram_1", "timeMin": 2.0, "fare": 0.5 }
            },
            {
                "id": "tram_1",
                "name": "Pier",
                "type": "tram",
                "lat": 40.76,
                "lon": 29.93,
                "isTerminal": true
            }
        ],
        "taxi": { "openingFee": 10.0, "costPerKm": 4.0 }
    }"#;

    #[test]
    fn loads_and_resolves_references() {
        let (network, fares) = load_dataset_str(DATASET).unwrap();
        assert_eq!(network.len(), 2);

        let center = network.stop(network.index_of("bus_1").unwrap());
        assert_eq!(center.kind, VehicleKind::Bus);
        assert_eq!(center.next_stops.len(), 1);
        assert_eq!(center.next_stops[0].target, 1);
        assert_eq!(center.transfer.as_ref().unwrap().target, 1);

        let pier = network.stop(1);
        assert!(pier.is_terminal);
        assert!(pier.next_stops.is_empty());
        assert!(pier.transfer.is_none());

        assert_eq!(fares.opening_fee, 10.0);
        assert_eq!(fares.cost_per_km, 4.0);
    }

    #[test]
    fn unknown_edge_target_is_an_error() {
        let broken = DATASET.replace("\"stopId\": \"tram_1\", \"distanceKm\"", "\"stopId\": \"ghost\", \"distanceKm\"");
        let err = load_dataset_str(&broken).unwrap_err();
        assert!(matches!(err, Error::UnknownStop(id) if id == "ghost"));
    }

    #[test]
    fn duplicate_ids_are_an_error() {
        let broken = DATASET.replace("\"id\": \"tram_1\"", "\"id\": \"bus_1\"");
        let err = load_dataset_str(&broken).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn missing_taxi_section_is_an_error() {
        let broken = DATASET.replace("\"taxi\"", "\"cab\"");
        assert!(load_dataset_str(&broken).is_err());
    }
}
