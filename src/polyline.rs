//! Point and polyline values handled by the codec.
//!
//! Callers with their own coordinate types can skip these entirely and go
//! through the [`LatLng`]/[`FromLatLng`] traits instead.

use serde::{Deserialize, Serialize};

use crate::traits::{FromLatLng, LatLng, points_from_pairs};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl LatLng for Point {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }
}

impl FromLatLng for Point {
    fn from_lat_lng(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// An ordered sequence of points. Duplicates are allowed and preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a polyline from raw `(lat, lng)` tuples.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(points_from_pairs(pairs))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl AsRef<[Point]> for Polyline {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
