//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Callers can implement [`Stop`] for their
//! own address records instead of converting them into [`crate::point::Point`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::GeocodeError;
use crate::point::Coordinates;

/// Unique identifier for planner entities.
///
/// `Display` is used when an id is named in an error.
pub trait Id: Clone + Eq + Hash + Debug + Display {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug + Display {}

/// A geocoded stop on a route.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);
}

impl<S: Stop> Stop for &S {
    type Id = S::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn location(&self) -> (f64, f64) {
        (**self).location()
    }
}

/// Resolves free-text addresses to coordinates.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError>;
}

/// Stores planned routes and hands back an identifier.
pub trait RouteStore<R> {
    type RouteId;
    type Error: std::error::Error + Send + Sync + 'static;

    fn persist(&mut self, route: &R) -> Result<Self::RouteId, Self::Error>;
}
