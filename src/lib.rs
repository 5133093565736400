//! # Kohonen - Self-Organizing Map configuration
//!
//! Kohonen defines the validated configuration model for Self-Organizing
//! Maps (SOMs). Every map topology and training run is described by a plain
//! record and checked against a fixed registry of supported options. Nothing
//! is built until the check passes.
//!
//! ## Overview
//!
//! - [`MapConfig`] describes the static topology: dimensions, grid type,
//!   codebook initializer and unit shape.
//! - [`TrainConfig`] describes one training run: method, radius and learning
//!   rate with their decay strategies, and the neighborhood function.
//! - [`validate_map_config`] and [`validate_train_config`] accept or reject a
//!   record at the first violated rule, reporting a [`ValidationError`].
//! - The option registries ([`UnitShape`], [`GridKind`], [`NeighbFn`],
//!   [`Decay`], [`TrainingMethod`]) are closed enums. Grid types and
//!   neighborhood functions resolve to their implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use kohonen::{MapConfig, RandomInit, Som, TrainConfig};
//!
//! let map = MapConfig {
//!     dims: vec![10, 10],
//!     grid: "planar".to_string(),
//!     ushape: "hexagon".to_string(),
//!     ..Default::default()
//! }
//! .with_init_func(RandomInit::seeded(42));
//! map.validate()?;
//!
//! let train = TrainConfig {
//!     method: "batch".to_string(),
//!     neighb_fn: "gaussian".to_string(),
//!     ..Default::default()
//! };
//! let train = train.resolve()?;
//!
//! let data = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
//! let som = Som::new(&map, &data)?;
//! let bmu = som.find_bmu(&[0.2, 0.8])?;
//! let weights = som
//!     .neighborhood_weights(bmu, &train, train.radius)
//!     .expect("find_bmu returns a unit on the map");
//! assert_eq!(weights.len(), 100);
//! # Ok::<(), kohonen::SomError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codebook;
pub mod config;
pub mod error;
pub mod grid;
pub mod map;
pub mod neighborhood;
pub mod options;

// Re-export commonly used types
pub use codebook::{CodebookInit, RandomInit};
pub use config::{
    validate_map_config, validate_train_config, MapConfig, MapSpec, SomSettings, TrainConfig,
    TrainSpec,
};
pub use error::{ErrorKind, Result, SomError, ValidationError};
pub use grid::{CoordsGenerator, PlanarGrid};
pub use map::Som;
pub use neighborhood::{Bubble, Gaussian, MexicanHat, Neighborhood};
pub use options::{Decay, GridKind, NeighbFn, OptionSet, TrainingMethod, UnitShape, UnknownOption};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MapConfig>();
        assert_send_sync::<TrainConfig>();
        assert_send_sync::<MapSpec>();
        assert_send_sync::<Som>();
        assert_send_sync::<ValidationError>();
    }
}
