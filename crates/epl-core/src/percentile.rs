// Percentile-rank normalization onto a common 0-100 scale.
//
// The rank of a value is the lower-bound insertion point of that value in the
// ascending population, as a share of the population size. Ties count as
// "at or below", so every member of a run of equal values gets the rank of
// the first element of the run.
//
// Boundary behavior: the largest member of a population ranks at
// (n-1)/n * 100, not 100, because the search finds the maximum at its own
// index. Only a value strictly above the maximum ranks 100.

use crate::error::StatsError;

/// Result reported for a value strictly greater than every population member.
pub const ABOVE_MAX_PERCENTILE: f64 = 100.0;

/// A population sorted once, ready to rank any number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    sorted: Vec<f64>,
}

impl Population {
    /// Sort `values` ascending.
    ///
    /// Rejects an empty population and any non-finite member.
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::InvalidInput(
                "population must not be empty".into(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::InvalidInput(format!(
                "population contains a non-finite value ({bad})"
            )));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Population { sorted })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Percentile rank of `value` in [0, 100].
    pub fn rank(&self, value: f64) -> Result<f64, StatsError> {
        if !value.is_finite() {
            return Err(StatsError::InvalidInput(format!(
                "cannot rank a non-finite value ({value})"
            )));
        }
        let position = self.sorted.partition_point(|member| *member < value);
        if position == self.sorted.len() {
            return Ok(ABOVE_MAX_PERCENTILE);
        }
        Ok(position as f64 / self.sorted.len() as f64 * 100.0)
    }
}

/// Percentile rank of `value` within `population`.
///
/// One-shot form of [`Population::rank`]; sorts a copy of `population`.
pub fn percentile_rank(value: f64, population: &[f64]) -> Result<f64, StatsError> {
    Population::new(population)?.rank(value)
}
