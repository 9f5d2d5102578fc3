pub mod client;
pub mod geocode;

pub use client::{OsrmClient, RouteResult, RoutingError};
pub use geocode::NominatimClient;
