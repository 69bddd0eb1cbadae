//! Concrete stop type and coordinate validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::Stop;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both values are finite and inside -90..=90 / -180..=180.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A geocoded address with a stable identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }

    pub fn from_coordinates(id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self::new(id, coordinates.lat, coordinates.lng)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

impl Stop for Point {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Check every stop for usable coordinates and unique ids.
pub fn validate_stops<S: Stop>(stops: &[S]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        let (lat, lng) = stop.location();
        if !Coordinates::new(lat, lng).is_valid() {
            return Err(ValidationError::InvalidCoordinate {
                id: stop.id().to_string(),
                lat,
                lng,
            });
        }
        if !seen.insert(stop.id()) {
            return Err(ValidationError::DuplicateId {
                id: stop.id().to_string(),
            });
        }
    }
    Ok(())
}
