//! Test fixtures for route-planner.
//!
//! Provides real Las Vegas / Henderson customer locations and helpers for
//! turning them into stops.

pub mod las_vegas_customers;

pub use las_vegas_customers::*;
