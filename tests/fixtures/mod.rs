//! Test fixtures for trip-planner.
//!
//! Provides realistic test data: western Washington counties with real
//! adjacency, centroids, city coordinates, and highway drive times.

pub mod washington;

pub use washington::*;
