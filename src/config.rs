//! Map and training configuration, and their validators.
//!
//! [`MapConfig`] and [`TrainConfig`] hold symbolic option names exactly as a
//! caller or a config file supplies them. Nothing downstream may use them
//! until they pass [`validate_map_config`] and [`validate_train_config`].
//! [`MapConfig::resolve`] and [`TrainConfig::resolve`] run the same checks
//! and return typed specs that carry registry enums instead of strings.
//!
//! Both validators stop at the first failing rule. A value of exactly zero
//! is accepted for dimensions, radius and learning rate. Only negative values
//! are rejected.

use crate::codebook::{CodebookInit, RandomInit};
use crate::error::{Result, ValidationError};
use crate::options::{Decay, GridKind, NeighbFn, OptionSet, TrainingMethod, UnitShape};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Number of grid dimensions supported. 3-D maps are not supported yet.
pub const SUPPORTED_DIMS: usize = 2;

fn default_init_func() -> Option<Arc<dyn CodebookInit>> {
    Some(Arc::new(RandomInit::default()))
}

/// Static topology of a SOM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Map dimensions: `[width, height]`.
    /// Default: [10, 10].
    pub dims: Vec<i64>,

    /// Grid type: planar.
    /// Default: "planar".
    pub grid: String,

    /// Codebook initializer. Not serialized; attach with [`MapConfig::with_init_func`].
    /// Default: [`RandomInit`] with no seed.
    #[serde(skip, default = "default_init_func")]
    pub init_func: Option<Arc<dyn CodebookInit>>,

    /// Unit shape: hexagon, rectangle.
    /// Default: "hexagon".
    pub ushape: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dims: vec![10, 10],
            grid: GridKind::Planar.name().to_string(),
            init_func: default_init_func(),
            ushape: UnitShape::Hexagon.name().to_string(),
        }
    }
}

impl MapConfig {
    /// Replaces the codebook initializer.
    pub fn with_init_func<I: CodebookInit + 'static>(mut self, init: I) -> Self {
        self.init_func = Some(Arc::new(init));
        self
    }

    /// Removes the codebook initializer.
    pub fn without_init_func(mut self) -> Self {
        self.init_func = None;
        self
    }

    /// Validates this config. See [`validate_map_config`].
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_map_config(self)
    }

    /// Validates this config and returns its typed form.
    pub fn resolve(&self) -> std::result::Result<MapSpec, ValidationError> {
        if self.dims.len() != SUPPORTED_DIMS {
            return Err(ValidationError::InvalidDimensionCount(self.dims.len()));
        }

        let mut dims = [0usize; SUPPORTED_DIMS];
        for (slot, &dim) in dims.iter_mut().zip(self.dims.iter()) {
            *slot = usize::try_from(dim)
                .map_err(|_| ValidationError::InvalidDimensions(self.dims.clone()))?;
        }

        let grid = GridKind::from_name(&self.grid)
            .ok_or_else(|| ValidationError::UnsupportedGrid(self.grid.clone()))?;

        let init_func = self
            .init_func
            .clone()
            .ok_or(ValidationError::MissingInitFunc)?;

        let shape = UnitShape::from_name(&self.ushape)
            .ok_or_else(|| ValidationError::UnsupportedShape(self.ushape.clone()))?;

        Ok(MapSpec {
            dims,
            grid,
            init_func,
            shape,
        })
    }
}

/// A validated [`MapConfig`].
#[derive(Debug, Clone)]
pub struct MapSpec {
    /// Map dimensions: `[width, height]`.
    pub dims: [usize; 2],
    /// Grid type.
    pub grid: GridKind,
    /// Codebook initializer.
    pub init_func: Arc<dyn CodebookInit>,
    /// Unit shape.
    pub shape: UnitShape,
}

impl MapSpec {
    /// Total number of units on the map, or `None` if `width * height`
    /// does not fit in a `usize`.
    #[inline]
    pub fn units(&self) -> Option<usize> {
        self.dims[0].checked_mul(self.dims[1])
    }

    /// Grid coordinates of every unit, row-major.
    ///
    /// Allocates one point per unit. [`Som::from_spec`](crate::Som::from_spec)
    /// checks the unit count before calling this.
    pub fn coords(&self) -> Vec<[f64; 2]> {
        self.grid.resolve().coords(self.shape, self.dims)
    }
}

/// Dynamics of a single training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Training method: seq, batch.
    /// Default: "batch".
    pub method: String,

    /// Initial neighborhood radius, in grid distance units.
    /// Default: 2.0.
    pub radius: f64,

    /// Radius decay strategy: lin, exp, inv.
    /// Default: "exp".
    pub rdecay: String,

    /// Neighborhood function: gaussian, bubble, mexican.
    /// Default: "gaussian".
    pub neighb_fn: String,

    /// Initial learning rate.
    /// Default: 0.5.
    pub lrate: f64,

    /// Learning rate decay strategy: lin, exp, inv.
    /// Default: "lin".
    pub ldecay: String,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            method: TrainingMethod::Batch.name().to_string(),
            radius: 2.0,
            rdecay: Decay::Exp.name().to_string(),
            neighb_fn: NeighbFn::Gaussian.name().to_string(),
            lrate: 0.5,
            ldecay: Decay::Lin.name().to_string(),
        }
    }
}

impl TrainConfig {
    /// Validates this config. See [`validate_train_config`].
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_train_config(self)
    }

    /// Validates this config and returns its typed form.
    pub fn resolve(&self) -> std::result::Result<TrainSpec, ValidationError> {
        let method = TrainingMethod::from_name(&self.method)
            .ok_or_else(|| ValidationError::UnsupportedMethod(self.method.clone()))?;

        // NaN is not rejected here, same as a plain `< 0` comparison.
        if self.radius < 0.0 {
            return Err(ValidationError::InvalidRadius(self.radius));
        }

        let rdecay = Decay::from_name(&self.rdecay)
            .ok_or_else(|| {
                ValidationError::UnsupportedRadiusDecay(self.rdecay.clone())
            })?;

        let neighb_fn = NeighbFn::from_name(&self.neighb_fn)
            .ok_or_else(|| {
                ValidationError::UnsupportedNeighbFn(self.neighb_fn.clone())
            })?;

        if self.lrate < 0.0 {
            return Err(ValidationError::InvalidLearningRate(self.lrate));
        }

        let ldecay = Decay::from_name(&self.ldecay)
            .ok_or_else(|| {
                ValidationError::UnsupportedLearningRateDecay(self.ldecay.clone())
            })?;

        Ok(TrainSpec {
            method,
            radius: self.radius,
            rdecay,
            neighb_fn,
            lrate: self.lrate,
            ldecay,
        })
    }
}

/// A validated [`TrainConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainSpec {
    /// Training method.
    pub method: TrainingMethod,
    /// Initial neighborhood radius.
    pub radius: f64,
    /// Radius decay strategy.
    pub rdecay: Decay,
    /// Neighborhood function.
    pub neighb_fn: NeighbFn,
    /// Initial learning rate.
    pub lrate: f64,
    /// Learning rate decay strategy.
    pub ldecay: Decay,
}

/// Checks that a map config can be used to build a grid and a codebook.
///
/// Rules, in order:
/// 1. exactly two dimensions;
/// 2. no negative dimension;
/// 3. grid type is supported;
/// 4. a codebook initializer is present;
/// 5. unit shape is supported.
pub fn validate_map_config(config: &MapConfig) -> std::result::Result<(), ValidationError> {
    match config.resolve() {
        Ok(_) => {
            debug!(
                "Map config accepted: dims={:?}, grid={}, ushape={}",
                config.dims, config.grid, config.ushape
            );
            Ok(())
        }
        Err(err) => {
            warn!("Map config rejected ({:?}): {}", err.kind(), err);
            Err(err)
        }
    }
}

/// Checks that a training config can drive a training run.
///
/// Rules, in order:
/// 1. training method is supported;
/// 2. radius is not negative;
/// 3. radius decay is supported;
/// 4. neighborhood function is supported;
/// 5. learning rate is not negative;
/// 6. learning rate decay is supported.
pub fn validate_train_config(config: &TrainConfig) -> std::result::Result<(), ValidationError> {
    match config.resolve() {
        Ok(_) => {
            debug!(
                "Train config accepted: method={}, radius={}, neighb_fn={}, lrate={}",
                config.method, config.radius, config.neighb_fn, config.lrate
            );
            Ok(())
        }
        Err(err) => {
            warn!("Train config rejected ({:?}): {}", err.kind(), err);
            Err(err)
        }
    }
}

/// File-level SOM settings: one map and one training run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SomSettings {
    /// Map configuration.
    pub map: MapConfig,

    /// Training configuration.
    pub train: TrainConfig,
}

impl SomSettings {
    /// Loads settings from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the map config, then the training config.
    pub fn validate(&self) -> Result<()> {
        validate_map_config(&self.map)?;
        validate_train_config(&self.train)?;
        Ok(())
    }
}
