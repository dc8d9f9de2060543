//! Test fixtures for polyline-encoder.
//!
//! Provides realistic test data including:
//! - Las Vegas Strip traces built from real OpenStreetMap locations
//! - Synthetic dense lines for stress and property checks

pub mod las_vegas_traces;

pub use las_vegas_traces::*;
