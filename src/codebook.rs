//! Codebook initialization.

use crate::error::{Result, SomError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Produces the initial weight vector of every map unit.
pub trait CodebookInit: fmt::Debug + Send + Sync {
    /// Returns `units` weight vectors with the same length as the rows of `data`.
    fn init(&self, data: &[Vec<f64>], units: usize) -> Result<Vec<Vec<f64>>>;
}

/// Draws every weight uniformly within the per-feature range of the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInit {
    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,
}

impl RandomInit {
    /// Creates an initializer with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// Per-feature `(min, max)` of the data, checking that rows are not ragged.
fn feature_bounds(data: &[Vec<f64>]) -> Result<Vec<(f64, f64)>> {
    let first = data
        .first()
        .ok_or_else(|| {
            SomError::EmptyInput("No data to initialize codebook from".to_string())
        })?;

    if first.is_empty() {
        return Err(SomError::EmptyInput("Data rows have no features".to_string()));
    }

    let mut bounds = vec![(f64::INFINITY, f64::NEG_INFINITY); first.len()];
    for row in data {
        if row.len() != bounds.len() {
            return Err(SomError::DimensionMismatch {
                expected: bounds.len(),
                actual: row.len(),
            });
        }
        for (b, &v) in bounds.iter_mut().zip(row.iter()) {
            b.0 = b.0.min(v);
            b.1 = b.1.max(v);
        }
    }

    Ok(bounds)
}

impl CodebookInit for RandomInit {
    fn init(&self, data: &[Vec<f64>], units: usize) -> Result<Vec<Vec<f64>>> {
        let bounds = feature_bounds(data)?;

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let codebook = (0..units)
            .map(|_| {
                bounds
                    .iter()
                    .map(|&(lo, hi)| if hi > lo { rng.gen_range(lo..hi) } else { lo })
                    .collect()
            })
            .collect();

        Ok(codebook)
    }
}
