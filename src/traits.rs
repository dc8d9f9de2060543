//! Coordinate capabilities consumed and produced by the codec.
//!
//! These are intentionally minimal. Map layers implement them for their own
//! point types so the codec never depends on a particular SDK's model.

/// Anything that can report a latitude/longitude pair in decimal degrees.
pub trait LatLng {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// Constructs a caller-native point from decoded decimal degrees.
pub trait FromLatLng: Sized {
    fn from_lat_lng(latitude: f64, longitude: f64) -> Self;
}

/// Tuples are read as (latitude, longitude).
impl LatLng for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

impl FromLatLng for (f64, f64) {
    fn from_lat_lng(latitude: f64, longitude: f64) -> Self {
        (latitude, longitude)
    }
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

/// Converts raw `(lat, lng)` pairs into any point type.
pub fn points_from_pairs<P: FromLatLng>(pairs: &[(f64, f64)]) -> Vec<P> {
    pairs
        .iter()
        .map(|&(lat, lng)| P::from_lat_lng(lat, lng))
        .collect()
}
