//! Multi-modal public transit route planning.
//!
//! Computes priced, timed itineraries between two geographic points over a
//! stop/transfer network, scoring candidate paths by a weighted blend of
//! travel time, distance and passenger-specific fare, and composing
//! first/last-mile walking or taxi legs around the transit segment.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{
    NextStop, Passenger, PassengerKind, PaymentCard, Stop, TaxiFares, Transfer, TransitNetwork,
    VehicleKind,
};
pub use routing::{RouteInfo, RoutePlanner, RouteStrategy};

/// Stop index within a [`TransitNetwork`].
pub type StopId = usize;

/// First/last-mile gaps longer than this are bridged by taxi instead of walking.
pub const TAXI_THRESHOLD_KM: f64 = 3.0;
