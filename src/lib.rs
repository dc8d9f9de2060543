//! polyline-encoder
//!
//! Douglas-Peucker simplification paired with the encoded polyline text
//! format: coordinates and zoom levels go in, two compact ASCII strings come
//! out, and the points string decodes back into any point type.

pub mod traits;
pub mod polyline;
pub mod config;
pub mod error;
pub mod simplify;
pub mod encoder;
pub mod decoder;

pub use config::{EncodingConfig, ZoomLevelBreaks};
pub use decoder::{decode, decode_all, decode_into, decode_levels, decode_with};
pub use encoder::{EncodedPolyline, PolylineEncoder, encode_coordinates, escape_backslashes};
pub use error::{FormatError, PolylineError};
pub use polyline::{Point, Polyline};
pub use simplify::{SimplificationResult, Simplifier};
pub use traits::{FromLatLng, LatLng, points_from_pairs};
