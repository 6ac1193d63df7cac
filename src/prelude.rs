// Re-export key components
pub use crate::error::Error;
pub use crate::geometry::haversine_km;
pub use crate::loading::{load_dataset, load_dataset_str};
pub use crate::model::{
    Passenger, PassengerKind, PaymentCard, Stop, TaxiFares, TransitNetwork, VehicleKind,
};
pub use crate::routing::taxi::taxi_only_route;
pub use crate::routing::{RouteInfo, RoutePlanner, RouteStrategy};

// Core types and constants
pub use crate::StopId;
pub use crate::TAXI_THRESHOLD_KM;
