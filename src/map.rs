//! Self-Organizing Map construction.

use crate::config::{MapConfig, MapSpec, TrainSpec};
use crate::error::{Result, SomError};
use crate::grid::grid_distance;
use crate::options::UnitShape;
use log::info;
use rayon::prelude::*;

/// Largest unit count whose coordinate buffer fits in an allocation.
pub const MAX_UNITS: usize = isize::MAX as usize / std::mem::size_of::<[f64; 2]>();

/// A Self-Organizing Map built from a validated [`MapConfig`].
///
/// Units are stored row-major. Unit `i` has grid position `coords()[i]` and
/// weight vector `codebook()[i]`.
#[derive(Debug, Clone)]
pub struct Som {
    spec: MapSpec,
    coords: Vec<[f64; 2]>,
    codebook: Vec<Vec<f64>>,
}

impl Som {
    /// Validates `config` and builds the grid and the initial codebook from `data`.
    pub fn new(config: &MapConfig, data: &[Vec<f64>]) -> Result<Self> {
        let spec = config.resolve()?;
        Self::from_spec(spec, data)
    }

    /// Builds a map from an already validated spec.
    ///
    /// Fails with [`SomError::Grid`] when the unit count overflows or the
    /// coordinate buffer could not be addressed.
    pub fn from_spec(spec: MapSpec, data: &[Vec<f64>]) -> Result<Self> {
        let units = spec
            .units()
            .filter(|&n| n <= MAX_UNITS)
            .ok_or_else(|| {
                SomError::Grid(format!(
                    "{}x{} grid exceeds the maximum of {} units",
                    spec.dims[0], spec.dims[1], MAX_UNITS
                ))
            })?;

        let coords = spec.coords();
        if coords.len() != units {
            return Err(SomError::Grid(format!(
                "{} generator produced {} coordinates for {} units",
                spec.grid,
                coords.len(),
                units
            )));
        }

        let codebook = spec.init_func.init(data, coords.len())?;
        if codebook.len() != coords.len() {
            return Err(SomError::Codebook(format!(
                "Initializer produced {} vectors for {} units",
                codebook.len(),
                coords.len()
            )));
        }

        info!(
            "Created SOM: {}x{} {} grid, {} units",
            spec.dims[0],
            spec.dims[1],
            spec.shape,
            coords.len()
        );

        Ok(Self {
            spec,
            coords,
            codebook,
        })
    }

    /// Returns the total number of units.
    #[inline]
    pub fn units(&self) -> usize {
        self.coords.len()
    }

    /// Map dimensions: `[width, height]`.
    #[inline]
    pub fn dims(&self) -> [usize; 2] {
        self.spec.dims
    }

    /// Unit shape.
    #[inline]
    pub fn shape(&self) -> UnitShape {
        self.spec.shape
    }

    /// The validated [`MapSpec`] the map was built from.
    pub fn spec(&self) -> &MapSpec {
        &self.spec
    }

    /// Grid coordinates of all units.
    pub fn coords(&self) -> &[[f64; 2]] {
        &self.coords
    }

    /// Weight vectors of all units.
    pub fn codebook(&self) -> &[Vec<f64>] {
        &self.codebook
    }

    /// Weight vector length, or 0 for a map without units.
    pub fn weight_dim(&self) -> usize {
        self.codebook.first().map_or(0, Vec::len)
    }

    /// Finds the Best Matching Unit (BMU) for an input vector.
    ///
    /// The BMU is the unit whose weight vector is closest to the input.
    pub fn find_bmu(&self, input: &[f64]) -> Result<usize> {
        if input.len() != self.weight_dim() {
            return Err(SomError::DimensionMismatch {
                expected: self.weight_dim(),
                actual: input.len(),
            });
        }

        let (bmu_idx, _) = self
            .codebook
            .par_iter()
            .enumerate()
            .map(|(i, w)| (i, distance_squared(w, input)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .ok_or_else(|| SomError::EmptyInput("SOM has no units".to_string()))?;

        Ok(bmu_idx)
    }

    /// Grid distance between two units.
    ///
    /// Returns `None` if either index is out of range.
    #[inline]
    pub fn unit_distance(&self, a: usize, b: usize) -> Option<f64> {
        Some(grid_distance(*self.coords.get(a)?, *self.coords.get(b)?))
    }

    /// Neighborhood weight of every unit relative to `bmu` at the given radius.
    ///
    /// The radius is passed in rather than taken from `train` so that callers
    /// can apply their own decay schedule. Returns `None` if `bmu` is out of
    /// range.
    pub fn neighborhood_weights(
        &self,
        bmu: usize,
        train: &TrainSpec,
        radius: f64,
    ) -> Option<Vec<f64>> {
        let neighb = train.neighb_fn.resolve();
        let center = *self.coords.get(bmu)?;

        let weights = self
            .coords
            .iter()
            .map(|&c| neighb.weight(grid_distance(center, c), radius))
            .collect();

        Some(weights)
    }
}

#[inline]
fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::RandomInit;
    use crate::config::TrainConfig;
    use crate::error::ValidationError;

    fn test_data() -> Vec<Vec<f64>> {
        vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]]
    }

    fn test_config() -> MapConfig {
        MapConfig {
            dims: vec![4, 3],
            ushape: "rectangle".to_string(),
            ..Default::default()
        }
        .with_init_func(RandomInit::seeded(42))
    }

    #[test]
    fn test_som_creation() {
        let som = Som::new(&test_config(), &test_data()).unwrap();
        assert_eq!(som.units(), 12);
        assert_eq!(som.dims(), [4, 3]);
        assert_eq!(som.shape(), UnitShape::Rectangle);
        assert_eq!(som.weight_dim(), 3);
        assert_eq!(som.codebook().len(), som.coords().len());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = test_config().without_init_func();
        let err = Som::new(&config, &test_data()).unwrap_err();
        assert!(matches!(
            err,
            SomError::Validation(ValidationError::MissingInitFunc)
        ));
    }

    #[test]
    fn test_find_bmu() {
        let mut som = Som::new(&test_config(), &test_data()).unwrap();
        som.codebook[5] = vec![1.0, 0.0, 0.0];
        for (i, w) in som.codebook.iter_mut().enumerate() {
            if i != 5 {
                *w = vec![0.0, 1.0, 1.0];
            }
        }

        assert_eq!(som.find_bmu(&[0.9, 0.1, 0.0]).unwrap(), 5);
        assert!(matches!(
            som.find_bmu(&[1.0]),
            Err(SomError::DimensionMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_unit_distance() {
        let som = Som::new(&test_config(), &test_data()).unwrap();
        // Unit 0 is (0, 0), unit 7 is (3, 1).
        let d = som.unit_distance(0, 7).unwrap();
        assert!((d - 10f64.sqrt()).abs() < 1e-12);

        assert_eq!(som.unit_distance(0, 12), None);
        assert_eq!(som.unit_distance(usize::MAX, 0), None);
    }

    #[test]
    fn test_neighborhood_weights() {
        let som = Som::new(&test_config(), &test_data()).unwrap();
        let train = TrainConfig {
            neighb_fn: "bubble".to_string(),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        let weights = som.neighborhood_weights(0, &train, 1.0).unwrap();
        assert_eq!(weights.len(), 12);
        assert_eq!(weights[0], 1.0);
        assert_eq!(weights[1], 1.0);
        assert_eq!(weights[4], 1.0);
        assert_eq!(weights[5], 0.0);

        assert!(som.neighborhood_weights(12, &train, 1.0).is_none());
    }

    #[test]
    fn test_empty_map() {
        let config = MapConfig {
            dims: vec![0, 5],
            ..test_config()
        };
        let som = Som::new(&config, &test_data()).unwrap();
        assert_eq!(som.units(), 0);
        assert!(matches!(som.find_bmu(&[]), Err(SomError::EmptyInput(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_overflowing_dims_rejected() {
        let config = MapConfig {
            dims: vec![1 << 33, 1 << 33],
            ..test_config()
        };
        assert!(config.validate().is_ok());

        let err = Som::new(&config, &test_data()).unwrap_err();
        assert!(matches!(err, SomError::Grid(_)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_grid_rejected() {
        // 2^62 units fit in a usize but not in one allocation.
        let config = MapConfig {
            dims: vec![1 << 31, 1 << 31],
            ..test_config()
        };
        let err = Som::new(&config, &test_data()).unwrap_err();
        assert!(matches!(err, SomError::Grid(_)));
    }
}
