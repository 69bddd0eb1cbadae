//! Greedy nearest-neighbor route ordering.
//!
//! This is a heuristic, not a TSP solver: there is no refinement pass and no
//! optimality guarantee. A far-away stop tends to end up last, producing a
//! long final leg.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cost::{estimate_costs, CostBreakdown, CostParameters};
use crate::error::ValidationError;
use crate::haversine::{haversine_km, km_to_minutes, DEFAULT_SPEED_KMH};
use crate::point::validate_stops;
use crate::traits::Stop;

#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Average speed used to turn distance into duration. Must be finite and
    /// positive; checked on every call.
    pub speed_kmh: f64,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl OptimizerOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.speed_kmh.is_finite() && self.speed_kmh > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidSpeed {
                speed_kmh: self.speed_kmh,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult<StopId> {
    /// Visiting order; a permutation of the input ids.
    pub order: Vec<StopId>,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
}

impl<StopId: Clone> OptimizationResult<StopId> {
    fn unmoved(order: Vec<StopId>) -> Self {
        Self {
            order,
            total_distance_km: 0.0,
            total_duration_min: 0.0,
        }
    }

    /// Copy for display: distance to 0.1 km, duration to whole minutes.
    pub fn rounded(&self) -> Self {
        Self {
            order: self.order.clone(),
            total_distance_km: (self.total_distance_km * 10.0).round() / 10.0,
            total_duration_min: self.total_duration_min.round(),
        }
    }
}

/// Statistics for a stop sequence taken as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub stop_count: usize,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    pub costs: CostBreakdown,
}

#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    options: OptimizerOptions,
}

impl RouteOptimizer {
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Order `stops` by repeatedly visiting the nearest unvisited stop.
    ///
    /// Starts at the stop whose id is `start`, or at the first stop. Ties go
    /// to the stop that comes first in input order. Fewer than two stops are
    /// returned unchanged with zero distance.
    pub fn optimize<S: Stop>(
        &self,
        stops: &[S],
        start: Option<&S::Id>,
    ) -> Result<OptimizationResult<S::Id>, ValidationError> {
        self.check_input(stops).map_err(reject)?;

        let start_index = match start {
            Some(id) => stops
                .iter()
                .position(|stop| stop.id() == id)
                .ok_or_else(|| reject(ValidationError::UnknownStart { id: id.to_string() }))?,
            None => 0,
        };

        if stops.len() < 2 {
            return Ok(OptimizationResult::unmoved(
                stops.iter().map(|stop| stop.id().clone()).collect(),
            ));
        }

        let mut current = &stops[start_index];
        let mut remaining: Vec<&S> = stops
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != start_index)
            .map(|(_, stop)| stop)
            .collect();
        let mut order = Vec::with_capacity(stops.len());
        order.push(current.id().clone());
        let mut total_distance_km = 0.0;

        while !remaining.is_empty() {
            let from = current.location();
            let mut nearest_index = 0;
            let mut nearest_distance = haversine_km(from, remaining[0].location());

            for (i, candidate) in remaining.iter().enumerate().skip(1) {
                let distance = haversine_km(from, candidate.location());
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest_index = i;
                }
            }

            current = remaining.remove(nearest_index);
            order.push(current.id().clone());
            total_distance_km += nearest_distance;
        }

        let total_duration_min = km_to_minutes(total_distance_km, self.options.speed_kmh);
        debug!(
            stops = stops.len(),
            total_distance_km, total_duration_min, "optimized route"
        );

        Ok(OptimizationResult {
            order,
            total_distance_km,
            total_duration_min,
        })
    }

    /// Distance, duration and cost of visiting `stops` in the given order.
    pub fn summarize<S: Stop>(
        &self,
        stops: &[S],
        params: &CostParameters,
    ) -> Result<RouteSummary, ValidationError> {
        self.check_input(stops)
            .and_then(|()| params.validate())
            .map_err(reject)?;

        let total_distance_km: f64 = stops
            .windows(2)
            .map(|leg| haversine_km(leg[0].location(), leg[1].location()))
            .sum();
        let total_duration_min = km_to_minutes(total_distance_km, self.options.speed_kmh);

        Ok(RouteSummary {
            stop_count: stops.len(),
            total_distance_km,
            total_duration_min,
            costs: estimate_costs(total_distance_km, total_duration_min, params),
        })
    }

    fn check_input<S: Stop>(&self, stops: &[S]) -> Result<(), ValidationError> {
        self.options.validate()?;
        validate_stops(stops)
    }
}

fn reject(err: ValidationError) -> ValidationError {
    warn!(%err, "rejecting route input");
    err
}
