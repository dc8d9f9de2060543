//! Encoded polyline writer.
//!
//! Output follows the widely used encoded polyline text format at five
//! decimal places, paired with a level string describing at which zoom each
//! retained point becomes visible.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::EncodingConfig;
use crate::error::PolylineError;
use crate::polyline::Polyline;
use crate::simplify::{SimplificationResult, Simplifier};
use crate::traits::LatLng;

/// Fixed-point scale for five decimal places.
pub const COORDINATE_SCALE: f64 = 1e5;

/// Two parallel strings with one entry per retained point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPolyline {
    pub encoded_points: String,
    pub encoded_levels: String,
}

impl EncodedPolyline {
    /// Encoded points with backslashes doubled, ready to paste into a
    /// string literal.
    pub fn points_literal(&self) -> String {
        escape_backslashes(&self.encoded_points)
    }

    /// Number of encoded points. Every level value is a single number, so
    /// counting its terminating characters is enough.
    pub fn len(&self) -> usize {
        self.encoded_levels
            .bytes()
            .filter(|b| b.wrapping_sub(63) & 0x20 == 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded_levels.is_empty()
    }
}

pub fn escape_backslashes(encoded: &str) -> String {
    encoded.replace('\\', "\\\\")
}

/// Appends an unsigned value, five bits per character, low bits first.
pub fn write_number(mut num: u64, out: &mut String) {
    while num >= 0x20 {
        let next = ((0x20 | (num & 0x1f)) + 63) as u8;
        out.push(char::from(next));
        num >>= 5;
    }
    out.push(char::from((num + 63) as u8));
}

/// Appends a signed value using the zig-zag transform.
pub fn write_signed_number(num: i64, out: &mut String) {
    let mut sgn_num = num << 1;
    if num < 0 {
        sgn_num = !sgn_num;
    }
    write_number(sgn_num as u64, out);
}

pub fn encode_number(num: u64) -> String {
    let mut out = String::new();
    write_number(num, &mut out);
    out
}

pub fn encode_signed_number(num: i64) -> String {
    let mut out = String::new();
    write_signed_number(num, &mut out);
    out
}

/// Truncates toward negative infinity at five decimal places.
fn scale(value: f64) -> i64 {
    (value * COORDINATE_SCALE).floor() as i64
}

/// Encodes the points whose `retained` flag is set, as deltas from the
/// previously encoded point.
///
/// The first and last points are always encoded regardless of their flag.
/// Coordinates are expected to be finite degrees; anything whose scaled value
/// does not fit in an `i64` saturates and its delta wraps instead of panicking.
pub fn encode_coordinates<P: LatLng>(points: &[P], retained: &[bool]) -> String {
    let last = points.len().saturating_sub(1);
    let mut out = String::new();
    let (mut plat, mut plng) = (0_i64, 0_i64);

    for (i, point) in points.iter().enumerate() {
        let keep = i == 0 || i == last || retained.get(i).copied().unwrap_or(false);
        if !keep {
            continue;
        }
        let lat = scale(point.latitude());
        let lng = scale(point.longitude());
        write_signed_number(lat.wrapping_sub(plat), &mut out);
        write_signed_number(lng.wrapping_sub(plng), &mut out);
        plat = lat;
        plng = lng;
    }
    out
}

/// Polyline encoder bound to one validated configuration.
#[derive(Debug, Clone)]
pub struct PolylineEncoder {
    simplifier: Simplifier,
}

impl PolylineEncoder {
    pub fn new(config: EncodingConfig) -> Result<Self, PolylineError> {
        Ok(Self {
            simplifier: Simplifier::new(config)?,
        })
    }

    pub fn config(&self) -> &EncodingConfig {
        self.simplifier.config()
    }

    pub fn simplifier(&self) -> &Simplifier {
        &self.simplifier
    }

    /// Simplifies the line and encodes what survives.
    pub fn encode<P: LatLng>(&self, points: &[P]) -> EncodedPolyline {
        let simplified = self.simplifier.simplify(points);
        EncodedPolyline {
            encoded_points: encode_coordinates(points, &simplified.retained_mask()),
            encoded_levels: self.encode_levels(&simplified),
        }
    }

    pub fn encode_polyline(&self, polyline: &Polyline) -> EncodedPolyline {
        self.encode(polyline.points())
    }

    /// Encodes independent lines on the rayon pool. Output order matches input.
    pub fn encode_all<L, P>(&self, lines: &[L]) -> Vec<EncodedPolyline>
    where
        L: AsRef<[P]> + Sync,
        P: LatLng + Sync,
    {
        tracing::debug!(lines = lines.len(), "encoding polylines in parallel");
        lines
            .par_iter()
            .map(|line| self.encode(line.as_ref()))
            .collect()
    }

    /// One level code per retained point, in the same order as the
    /// coordinate encoding.
    pub fn encode_levels(&self, simplified: &SimplificationResult) -> String {
        let n = simplified.len();
        let mut out = String::new();
        if n == 0 {
            return out;
        }

        let config = self.simplifier.config();
        let breaks = self.simplifier.breaks();
        let num_levels = breaks.num_levels();
        let endpoint_level = if config.force_endpoints {
            num_levels - 1
        } else {
            num_levels - breaks.level_for(simplified.abs_max_dist()) - 1
        };

        write_number(u64::from(endpoint_level), &mut out);
        for i in 1..n.saturating_sub(1) {
            if let Some(dist) = simplified.significance(i) {
                let level = num_levels - breaks.level_for(dist) - 1;
                write_number(u64::from(level), &mut out);
            }
        }
        if n > 1 {
            write_number(u64::from(endpoint_level), &mut out);
        }
        out
    }
}
