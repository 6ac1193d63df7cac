//! Passenger categories, discounts and payment instruments.

use geo::Point;
use serde::{Deserialize, Serialize};

/// Default walking speed divisor (original dataset convention:
/// walking time in minutes = distance in km / speed).
pub const DEFAULT_WALKING_SPEED: f64 = 5.0;

/// Passenger category with its fare discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerKind {
    General,
    Student,
    Elderly,
}

impl PassengerKind {
    /// Applies the category discount to a raw fare.
    pub fn discount(self, fare: f64) -> f64 {
        match self {
            PassengerKind::General => fare,
            PassengerKind::Student => fare * 0.5,
            PassengerKind::Elderly => 0.0,
        }
    }
}

/// A payment instrument holding a balance. Used only for feasibility
/// checks in the presentation layer, never by routing itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentCard {
    pub balance: f64,
}

impl PaymentCard {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    pub fn pay(&self, fare: f64) -> bool {
        self.balance >= fare
    }
}

/// A passenger and their current planning request.
///
/// Mutable between planning requests (location and target may change);
/// each planning call reads a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub kind: PassengerKind,
    /// Current location, `x = lon, y = lat`.
    pub location: Point<f64>,
    /// Requested destination.
    pub target: Point<f64>,
    pub walking_speed: f64,
    pub special_day: bool,
    pub credit_cards: Vec<PaymentCard>,
    pub cash_cards: Vec<PaymentCard>,
    pub city_cards: Vec<PaymentCard>,
}

impl Passenger {
    pub fn new(kind: PassengerKind, location: Point<f64>, target: Point<f64>) -> Self {
        Self {
            kind,
            location,
            target,
            walking_speed: DEFAULT_WALKING_SPEED,
            special_day: false,
            credit_cards: Vec::new(),
            cash_cards: Vec::new(),
            city_cards: Vec::new(),
        }
    }

    pub fn walking_time_min(&self, distance_km: f64) -> f64 {
        distance_km / self.walking_speed
    }

    pub fn credit_balance(&self) -> f64 {
        self.credit_cards.iter().map(|c| c.balance).sum()
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_cards.iter().map(|c| c.balance).sum()
    }

    pub fn city_card_balance(&self) -> f64 {
        self.city_cards.iter().map(|c| c.balance).sum()
    }

    /// Whether the combined balance of all instruments covers `amount`.
    pub fn can_pay(&self, amount: f64) -> bool {
        self.credit_balance() + self.cash_balance() + self.city_card_balance() >= amount
    }
}
