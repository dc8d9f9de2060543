//! Encoded polyline reader.
//!
//! Geometry is reconstructed from the points string alone; the levels string
//! can be read separately with [`decode_levels`].

use rayon::prelude::*;

use crate::error::{FormatError, PolylineError};
use crate::polyline::Point;
use crate::traits::FromLatLng;

const MIN_BYTE: u8 = 63;
const MAX_BYTE: u8 = 126;

/// Reads one unsigned value starting at `*index`, advancing past it.
pub fn decode_number(bytes: &[u8], index: &mut usize) -> Result<u64, FormatError> {
    let start = *index;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(FormatError::Truncated { offset: *index });
        };
        if !(MIN_BYTE..=MAX_BYTE).contains(&byte) {
            return Err(FormatError::InvalidCharacter {
                offset: *index,
                byte,
            });
        }
        *index += 1;

        let chunk = u64::from(byte - MIN_BYTE);
        if shift >= 64 || (shift > 0 && (chunk & 0x1f) >> (64 - shift) != 0) {
            return Err(FormatError::Overflow { offset: start });
        }
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk & 0x20 == 0 {
            return Ok(result);
        }
    }
}

/// Reads one zig-zag encoded signed value.
pub fn decode_signed_number(bytes: &[u8], index: &mut usize) -> Result<i64, FormatError> {
    let value = decode_number(bytes, index)?;
    let half = (value >> 1) as i64;
    Ok(if value & 1 == 1 { !half } else { half })
}

/// Decodes a points string into the crate's [`Point`] type.
pub fn decode(encoded: &str) -> Result<Vec<Point>, PolylineError> {
    decode_into(encoded)
}

/// Decodes into any point type that can be built from lat/lng.
pub fn decode_into<P: FromLatLng>(encoded: &str) -> Result<Vec<P>, PolylineError> {
    decode_with(encoded, P::from_lat_lng)
}

/// Decodes using a caller-supplied point constructor.
///
/// Nothing is returned unless the whole string decodes.
pub fn decode_with<P, F>(encoded: &str, mut make_point: F) -> Result<Vec<P>, PolylineError>
where
    F: FnMut(f64, f64) -> P,
{
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut points = Vec::new();
    let (mut lat, mut lng) = (0_i64, 0_i64);

    while index < bytes.len() {
        let start = index;
        let dlat = decode_signed_number(bytes, &mut index)?;
        let dlng = decode_signed_number(bytes, &mut index)?;
        lat = lat
            .checked_add(dlat)
            .ok_or(FormatError::Overflow { offset: start })?;
        lng = lng
            .checked_add(dlng)
            .ok_or(FormatError::Overflow { offset: start })?;
        points.push(make_point(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }
    Ok(points)
}

/// Decodes a levels string into the numbers the encoder emitted.
pub fn decode_levels(encoded: &str) -> Result<Vec<u32>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut levels = Vec::new();

    while index < bytes.len() {
        let start = index;
        let value = decode_number(bytes, &mut index)?;
        let level =
            u32::try_from(value).map_err(|_| FormatError::Overflow { offset: start })?;
        levels.push(level);
    }
    Ok(levels)
}

/// Decodes independent strings on the rayon pool. Output order matches input.
pub fn decode_all<S: AsRef<str> + Sync>(encoded: &[S]) -> Vec<Result<Vec<Point>, PolylineError>> {
    encoded.par_iter().map(|s| decode(s.as_ref())).collect()
}
