//! Route search, path aggregation and itinerary composition.

mod aggregate;
mod relaxation;
mod score;

pub mod planner;
pub mod route_info;
pub mod taxi;

pub use planner::RoutePlanner;
pub use route_info::{RouteInfo, RouteStrategy};
