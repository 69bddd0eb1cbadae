//! Trip cost model: fuel, driver time and vehicle maintenance.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Rates used to price a trip.
///
/// Deserializes with per-field defaults, so a config document only needs the
/// rates it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    /// Fuel consumption in liters per 100 km.
    pub fuel_consumption_l_per_100km: f64,
    /// Fuel price per liter.
    pub fuel_price_per_l: f64,
    /// Driver cost per hour.
    pub hourly_rate: f64,
    /// Vehicle wear per km.
    pub maintenance_rate_per_km: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            fuel_consumption_l_per_100km: 8.0,
            fuel_price_per_l: 1.80,
            hourly_rate: 30.0,
            maintenance_rate_per_km: 0.05,
        }
    }
}

impl CostParameters {
    /// Reject rates that are negative or not finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let rates = [
            ("fuel_consumption_l_per_100km", self.fuel_consumption_l_per_100km),
            ("fuel_price_per_l", self.fuel_price_per_l),
            ("hourly_rate", self.hourly_rate),
            ("maintenance_rate_per_km", self.maintenance_rate_per_km),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fuel_cost: f64,
    pub time_cost: f64,
    pub maintenance_cost: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.fuel_cost + self.time_cost + self.maintenance_cost
    }
}

/// Price a trip of `distance_km` taking `duration_min`.
///
/// Rates are used as given; see [`CostParameters::validate`].
pub fn estimate_costs(
    distance_km: f64,
    duration_min: f64,
    params: &CostParameters,
) -> CostBreakdown {
    let fuel_l = distance_km * params.fuel_consumption_l_per_100km / 100.0;
    CostBreakdown {
        fuel_cost: fuel_l * params.fuel_price_per_l,
        time_cost: duration_min / 60.0 * params.hourly_rate,
        maintenance_cost: distance_km * params.maintenance_rate_per_km,
    }
}
