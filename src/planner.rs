//! Route generation: optimize, price and hand off to storage.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cost::{estimate_costs, CostBreakdown, CostParameters};
use crate::error::PlannerError;
use crate::optimizer::RouteOptimizer;
use crate::traits::{RouteStore, Stop};

/// A generated route as handed to a [`RouteStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute<S, StopId> {
    pub name: String,
    /// Stops in the order they were supplied.
    pub stops: Vec<S>,
    /// Visiting order.
    pub order: Vec<StopId>,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    pub costs: CostBreakdown,
}

/// Stored id and plan returned by [`RoutePlanner::generate_route`].
pub type Generated<T, S> = (
    <T as RouteStore<PlannedRoute<S, <S as Stop>::Id>>>::RouteId,
    PlannedRoute<S, <S as Stop>::Id>,
);

pub struct RoutePlanner<T> {
    store: T,
    optimizer: RouteOptimizer,
    cost_params: CostParameters,
}

impl<T> RoutePlanner<T> {
    pub fn new(store: T, optimizer: RouteOptimizer, cost_params: CostParameters) -> Self {
        Self {
            store,
            optimizer,
            cost_params,
        }
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    pub fn cost_params(&self) -> &CostParameters {
        &self.cost_params
    }

    /// Optimize `stops` starting from the first one, price the result and
    /// persist it under `name`.
    pub fn generate_route<S>(
        &mut self,
        name: &str,
        stops: Vec<S>,
    ) -> Result<Generated<T, S>, PlannerError>
    where
        S: Stop,
        T: RouteStore<PlannedRoute<S, S::Id>>,
    {
        if stops.len() < 2 {
            return Err(PlannerError::NotEnoughStops { found: stops.len() });
        }

        self.cost_params.validate()?;
        let result = self.optimizer.optimize(&stops, None)?;
        let costs = estimate_costs(
            result.total_distance_km,
            result.total_duration_min,
            &self.cost_params,
        );

        let route = PlannedRoute {
            name: name.to_string(),
            stops,
            order: result.order,
            total_distance_km: result.total_distance_km,
            total_duration_min: result.total_duration_min,
            costs,
        };

        let id = self
            .store
            .persist(&route)
            .map_err(|err| PlannerError::Store(Box::new(err)))?;
        info!(
            name,
            stops = route.stops.len(),
            total_cost = route.costs.total(),
            "stored route"
        );

        Ok((id, route))
    }
}
