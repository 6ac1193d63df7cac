//! Vehicle modes and taxi fare parameters.

use serde::{Deserialize, Serialize};

/// Default taxi cruising speed in km/h.
pub const DEFAULT_TAXI_SPEED_KMH: f64 = 70.0;

/// Transit mode of a stop, also usable as a route bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Bus,
    Tram,
    Taxi,
}

impl VehicleKind {
    /// Modes whose fares are waived on a special day.
    pub fn is_fare_exempt(self) -> bool {
        matches!(self, VehicleKind::Bus | VehicleKind::Tram)
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleKind::Bus => "bus",
            VehicleKind::Tram => "tram",
            VehicleKind::Taxi => "taxi",
        };
        f.write_str(name)
    }
}

/// Distance-based taxi pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxiFares {
    pub opening_fee: f64,
    pub cost_per_km: f64,
    /// Cruising speed in km/h, used to convert leg distance into minutes.
    pub speed_kmh: f64,
}

impl TaxiFares {
    pub fn new(opening_fee: f64, cost_per_km: f64) -> Self {
        Self {
            opening_fee,
            cost_per_km,
            speed_kmh: DEFAULT_TAXI_SPEED_KMH,
        }
    }

    pub fn fare(&self, distance_km: f64) -> f64 {
        self.opening_fee + distance_km * self.cost_per_km
    }

    pub fn travel_time_min(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh * 60.0
    }
}
