//! Error types for validation, geocoding and route planning.

use thiserror::Error;

/// Rejected optimizer input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A coordinate is NaN, infinite or outside the valid lat/lng range.
    #[error("stop {id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { id: String, lat: f64, lng: f64 },

    /// Two stops share the same identifier.
    #[error("stop id {id} appears more than once")]
    DuplicateId { id: String },

    /// The requested start stop is not part of the input.
    #[error("start stop {id} is not among the stops")]
    UnknownStart { id: String },

    /// Average speed is zero, negative or not finite.
    #[error("average speed must be a positive number of km/h, got {speed_kmh}")]
    InvalidSpeed { speed_kmh: f64 },

    /// A cost rate is negative or not finite.
    #[error("cost rate {name} must be a non-negative number, got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}

/// Failures while resolving an address to coordinates.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("address is empty")]
    EmptyAddress,

    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not geocode {address:?}")]
    NoMatch { address: String },

    /// The service answered with coordinates that are unparsable or out of range.
    #[error("geocoder returned invalid coordinates for {address:?}: {detail}")]
    InvalidResponse { address: String, detail: String },
}

/// Errors from [`crate::planner::RoutePlanner::generate_route`].
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("at least 2 stops are required to generate a route, got {found}")]
    NotEnoughStops { found: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to store route: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
