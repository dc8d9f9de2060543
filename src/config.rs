//! Encoder configuration and the zoom-level breaks derived from it.

use serde::{Deserialize, Serialize};

use crate::error::PolylineError;

/// Number of discrete zoom levels.
pub const DEFAULT_NUM_LEVELS: u32 = 18;

/// Ratio between consecutive zoom-level breaks.
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Distances at or below this (in degrees) are treated as insignificant.
pub const DEFAULT_VERY_SMALL: f64 = 0.00001;

/// Upper bound on `num_levels`.
pub const MAX_NUM_LEVELS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    pub num_levels: u32,
    pub zoom_factor: f64,
    pub very_small: f64,
    /// Encode both endpoints at the finest level instead of the line's coarsest.
    pub force_endpoints: bool,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            num_levels: DEFAULT_NUM_LEVELS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            very_small: DEFAULT_VERY_SMALL,
            force_endpoints: true,
        }
    }
}

impl EncodingConfig {
    pub fn with_num_levels(mut self, num_levels: u32) -> Self {
        self.num_levels = num_levels;
        self
    }

    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    pub fn with_very_small(mut self, very_small: f64) -> Self {
        self.very_small = very_small;
        self
    }

    pub fn with_force_endpoints(mut self, force_endpoints: bool) -> Self {
        self.force_endpoints = force_endpoints;
        self
    }

    pub fn validate(&self) -> Result<(), PolylineError> {
        if self.num_levels == 0 {
            return Err(PolylineError::Configuration(
                "num_levels must be positive".to_string(),
            ));
        }
        if self.num_levels > MAX_NUM_LEVELS {
            return Err(PolylineError::Configuration(format!(
                "num_levels must be at most {}, got {}",
                MAX_NUM_LEVELS, self.num_levels
            )));
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(PolylineError::Configuration(format!(
                "zoom_factor must be a finite value greater than 1, got {}",
                self.zoom_factor
            )));
        }
        if !self.very_small.is_finite() || self.very_small <= 0.0 {
            return Err(PolylineError::Configuration(format!(
                "very_small must be a finite positive value, got {}",
                self.very_small
            )));
        }
        Ok(())
    }
}

/// Distance thresholds for each zoom level, coarsest first.
///
/// `breaks[i] = very_small * zoom_factor^(num_levels - i - 1)`, so the last
/// break is `very_small` itself and the sequence is strictly decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomLevelBreaks {
    breaks: Vec<f64>,
    very_small: f64,
}

impl ZoomLevelBreaks {
    pub fn new(config: &EncodingConfig) -> Result<Self, PolylineError> {
        config.validate()?;

        let n = config.num_levels;
        let breaks: Vec<f64> = (0..n)
            .map(|i| config.very_small * config.zoom_factor.powi((n - i - 1) as i32))
            .collect();
        if !breaks[0].is_finite() {
            return Err(PolylineError::Configuration(format!(
                "coarsest zoom level break overflows for zoom_factor {} over {} levels",
                config.zoom_factor, n
            )));
        }

        Ok(Self {
            breaks,
            very_small: config.very_small,
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.breaks
    }

    pub fn num_levels(&self) -> u32 {
        self.breaks.len() as u32
    }

    /// Maps a significance distance to a zoom level in `0..num_levels`.
    ///
    /// Returns the first level whose break the distance reaches. The scan is
    /// clamped to the last level; a distance below every break would
    /// otherwise walk off the table.
    pub fn level_for(&self, distance: f64) -> u32 {
        if distance.is_nan() || distance <= self.very_small {
            return 0;
        }

        let last = self.breaks.len() - 1;
        let mut level = 0;
        while level < last && distance < self.breaks[level] {
            level += 1;
        }
        if level == last && distance < self.breaks[last] {
            tracing::warn!(distance, "distance below every zoom level break, clamping");
        }
        level as u32
    }
}
