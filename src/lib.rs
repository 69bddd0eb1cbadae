//! route-planner core
//!
//! Nearest-neighbor stop ordering, haversine distance and trip cost
//! estimation, plus the geocoding and storage seams around them.

pub mod traits;
pub mod error;
pub mod point;
pub mod haversine;
pub mod optimizer;
pub mod cost;
pub mod geocode;
pub mod planner;

pub use cost::{estimate_costs, CostBreakdown, CostParameters};
pub use error::{GeocodeError, PlannerError, ValidationError};
pub use optimizer::{OptimizationResult, OptimizerOptions, RouteOptimizer, RouteSummary};
pub use point::{Coordinates, Point};
