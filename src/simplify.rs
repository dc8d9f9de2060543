//! Douglas-Peucker simplification that records why each point was kept.
//!
//! Rather than only dropping points, the simplifier remembers the distance
//! from the chord at the step where each point was selected. The encoder
//! turns those distances into zoom levels.

use crate::config::{EncodingConfig, ZoomLevelBreaks};
use crate::error::PolylineError;
use crate::traits::LatLng;

/// Per-point outcome of a simplification pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplificationResult {
    /// `Some(distance)` for interior points kept as significant.
    /// Endpoints are always kept and carry `None`.
    significances: Vec<Option<f64>>,
    /// Largest distance observed anywhere during the pass.
    abs_max_dist: f64,
}

impl SimplificationResult {
    /// Keeps every point without computing distances.
    fn keep_all(len: usize) -> Self {
        Self {
            significances: vec![None; len],
            abs_max_dist: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.significances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significances.is_empty()
    }

    /// Significance distance of an interior point, if it was kept.
    pub fn significance(&self, index: usize) -> Option<f64> {
        self.significances.get(index).copied().flatten()
    }

    pub fn is_retained(&self, index: usize) -> bool {
        let n = self.significances.len();
        if index >= n {
            return false;
        }
        n <= 2 || index == 0 || index == n - 1 || self.significances[index].is_some()
    }

    /// One flag per input point.
    pub fn retained_mask(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.is_retained(i)).collect()
    }

    pub fn retained_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_retained(i)).count()
    }

    pub fn abs_max_dist(&self) -> f64 {
        self.abs_max_dist
    }
}

/// Distance from `p` to the segment `a`-`b` in raw degree space.
///
/// `seg_length` is the squared chord length, passed in because every point
/// of a range shares it.
pub fn segment_distance<P: LatLng>(p: &P, a: &P, b: &P, seg_length: f64) -> f64 {
    let (plat, plng) = (p.latitude(), p.longitude());
    let (alat, alng) = (a.latitude(), a.longitude());
    let (blat, blng) = (b.latitude(), b.longitude());

    // A chord that squares to zero has no direction to project onto.
    if seg_length == 0.0 || (alat == blat && alng == blng) {
        return euclidean(plat - alat, plng - alng);
    }

    let u = ((plat - alat) * (blat - alat) + (plng - alng) * (blng - alng)) / seg_length;
    if u <= 0.0 {
        euclidean(plat - alat, plng - alng)
    } else if u >= 1.0 {
        euclidean(plat - blat, plng - blng)
    } else {
        euclidean(plat - alat - u * (blat - alat), plng - alng - u * (blng - alng))
    }
}

fn euclidean(dlat: f64, dlng: f64) -> f64 {
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Simplifier bound to one configuration.
#[derive(Debug, Clone)]
pub struct Simplifier {
    config: EncodingConfig,
    breaks: ZoomLevelBreaks,
}

impl Simplifier {
    pub fn new(config: EncodingConfig) -> Result<Self, PolylineError> {
        let breaks = ZoomLevelBreaks::new(&config)?;
        Ok(Self { config, breaks })
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    pub fn breaks(&self) -> &ZoomLevelBreaks {
        &self.breaks
    }

    /// Runs the reduction with an explicit stack of index ranges, so very
    /// long lines never hit recursion limits.
    pub fn simplify<P: LatLng>(&self, points: &[P]) -> SimplificationResult {
        let n = points.len();
        if n <= 2 {
            return SimplificationResult::keep_all(n);
        }

        let very_small = self.config.very_small;
        let mut significances = vec![None; n];
        let mut abs_max_dist = 0.0_f64;
        let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];

        while let Some((lo, hi)) = stack.pop() {
            let (first, last) = (&points[lo], &points[hi]);
            let seg_length = (last.latitude() - first.latitude()).powi(2)
                + (last.longitude() - first.longitude()).powi(2);

            let mut max_dist = 0.0_f64;
            let mut max_loc = None;
            for (i, point) in points.iter().enumerate().take(hi).skip(lo + 1) {
                let dist = segment_distance(point, first, last, seg_length);
                if dist > max_dist {
                    max_dist = dist;
                    max_loc = Some(i);
                }
            }
            abs_max_dist = abs_max_dist.max(max_dist);

            if let Some(loc) = max_loc.filter(|_| max_dist > very_small) {
                significances[loc] = Some(max_dist);
                stack.push((lo, loc));
                stack.push((loc, hi));
            }
        }

        let result = SimplificationResult {
            significances,
            abs_max_dist,
        };
        tracing::debug!(
            input = n,
            retained = result.retained_count(),
            abs_max_dist,
            "simplified polyline"
        );
        result
    }
}
