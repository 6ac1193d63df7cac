//! Data model for the transit network, passengers and vehicles.

pub mod network;
pub mod passenger;
pub mod vehicle;

pub use network::{NextStop, Stop, Transfer, TransitNetwork};
pub use passenger::{Passenger, PassengerKind, PaymentCard};
pub use vehicle::{TaxiFares, VehicleKind};
