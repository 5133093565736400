//! Registries of supported SOM options.
//!
//! Every registry is a closed enum whose variants are the legal symbolic
//! names for one configuration field. Membership tests go through
//! [`OptionSet::contains`]. The behavior registries ([`GridKind`] and
//! [`NeighbFn`]) also resolve a variant to its implementation.

use crate::grid::{CoordsGenerator, PlanarGrid};
use crate::neighborhood::{Bubble, Gaussian, MexicanHat, Neighborhood};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed, process-wide table of named options.
pub trait OptionSet: Sized + Copy + 'static {
    /// Registry name, used in diagnostics.
    const REGISTRY: &'static str;

    /// All supported variants, in declaration order.
    fn variants() -> &'static [Self];

    /// The symbolic name of this variant.
    fn name(&self) -> &'static str;

    /// Looks up a variant by its symbolic name. Matching is exact.
    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }

    /// Returns true if `name` is a key of this registry.
    fn contains(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// All supported names.
    fn names() -> Vec<&'static str> {
        Self::variants().iter().map(|v| v.name()).collect()
    }
}

/// Returned by `FromStr` when a name is not a registry key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {registry}: {name}")]
pub struct UnknownOption {
    /// Registry that was searched.
    pub registry: &'static str,
    /// The name that was not found.
    pub name: String,
}

fn parse_option<T: OptionSet>(s: &str) -> Result<T, UnknownOption> {
    T::from_name(s).ok_or_else(|| UnknownOption {
        registry: T::REGISTRY,
        name: s.to_string(),
    })
}

/// Shape of a single map unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitShape {
    /// Hexagonal units, six equidistant neighbors.
    Hexagon,
    /// Rectangular units, four direct neighbors.
    Rectangle,
}

impl OptionSet for UnitShape {
    const REGISTRY: &'static str = "unit shape";

    fn variants() -> &'static [Self] {
        &[Self::Hexagon, Self::Rectangle]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Hexagon => "hexagon",
            Self::Rectangle => "rectangle",
        }
    }
}

/// Decay strategy for the radius or the learning rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decay {
    /// Linear decay.
    Lin,
    /// Exponential decay.
    Exp,
    /// Inverse-time decay.
    Inv,
}

impl OptionSet for Decay {
    const REGISTRY: &'static str = "decay strategy";

    fn variants() -> &'static [Self] {
        &[Self::Lin, Self::Exp, Self::Inv]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Lin => "lin",
            Self::Exp => "exp",
            Self::Inv => "inv",
        }
    }
}

/// How codebook updates are applied during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMethod {
    /// Sequential (online) updates, one sample at a time.
    Seq,
    /// Batch updates over the whole data set per epoch.
    Batch,
}

impl OptionSet for TrainingMethod {
    const REGISTRY: &'static str = "training method";

    fn variants() -> &'static [Self] {
        &[Self::Seq, Self::Batch]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Seq => "seq",
            Self::Batch => "batch",
        }
    }
}

/// Grid topology, bound to a coordinate generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// Flat two-dimensional grid.
    Planar,
}

impl OptionSet for GridKind {
    const REGISTRY: &'static str = "grid type";

    fn variants() -> &'static [Self] {
        &[Self::Planar]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Planar => "planar",
        }
    }
}

impl GridKind {
    /// Returns the coordinate generator for this grid.
    pub fn resolve(&self) -> &'static dyn CoordsGenerator {
        match self {
            Self::Planar => &PlanarGrid,
        }
    }

    /// Resolves a grid name straight to its generator.
    pub fn resolve_name(name: &str) -> Option<&'static dyn CoordsGenerator> {
        Self::from_name(name).map(|g| g.resolve())
    }
}

/// Neighborhood function, bound to its weighting implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighbFn {
    /// Gaussian kernel.
    Gaussian,
    /// Hard cutoff at the radius.
    Bubble,
    /// Mexican hat (Ricker) kernel.
    Mexican,
}

impl OptionSet for NeighbFn {
    const REGISTRY: &'static str = "neighbourhood function";

    fn variants() -> &'static [Self] {
        &[Self::Gaussian, Self::Bubble, Self::Mexican]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Bubble => "bubble",
            Self::Mexican => "mexican",
        }
    }
}

impl NeighbFn {
    /// Returns the weighting implementation for this function.
    pub fn resolve(&self) -> &'static dyn Neighborhood {
        match self {
            Self::Gaussian => &Gaussian,
            Self::Bubble => &Bubble,
            Self::Mexican => &MexicanHat,
        }
    }

    /// Resolves a function name straight to its implementation.
    pub fn resolve_name(name: &str) -> Option<&'static dyn Neighborhood> {
        Self::from_name(name).map(|n| n.resolve())
    }
}

macro_rules! impl_name_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownOption;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_option(s)
                }
            }
        )+
    };
}

impl_name_traits!(UnitShape, Decay, TrainingMethod, GridKind, NeighbFn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys() {
        assert_eq!(UnitShape::names(), vec!["hexagon", "rectangle"]);
        assert_eq!(Decay::names(), vec!["lin", "exp", "inv"]);
        assert_eq!(TrainingMethod::names(), vec!["seq", "batch"]);
        assert_eq!(GridKind::names(), vec!["planar"]);
        assert_eq!(NeighbFn::names(), vec!["gaussian", "bubble", "mexican"]);
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(UnitShape::contains("hexagon"));
        assert!(!UnitShape::contains("Hexagon"));
        assert!(!UnitShape::contains(" hexagon"));
        assert!(!Decay::contains(""));
        assert!(!TrainingMethod::contains("online"));
        assert!(!GridKind::contains("hex3d"));
        assert!(NeighbFn::contains("mexican"));
    }

    #[test]
    fn test_from_str_and_display() {
        let shape: UnitShape = "rectangle".parse().unwrap();
        assert_eq!(shape, UnitShape::Rectangle);
        assert_eq!(shape.to_string(), "rectangle");

        let err = "toroid".parse::<GridKind>().unwrap_err();
        assert_eq!(err.registry, "grid type");
        assert_eq!(err.to_string(), "unknown grid type: toroid");
        let source: &dyn std::error::Error = &err;
        assert!(source.source().is_none());
    }

    #[test]
    fn test_serde_uses_symbolic_names() {
        let json = serde_json::to_string(&NeighbFn::Mexican).unwrap();
        assert_eq!(json, "\"mexican\"");
        let decay: Decay = serde_json::from_str("\"inv\"").unwrap();
        assert_eq!(decay, Decay::Inv);
    }

    #[test]
    fn test_resolve_behaviors() {
        assert!(GridKind::resolve_name("planar").is_some());
        assert!(GridKind::resolve_name("spherical").is_none());

        let gaussian = NeighbFn::resolve_name("gaussian").unwrap();
        assert!((gaussian.weight(0.0, 1.0) - 1.0).abs() < 1e-12);
        assert!(NeighbFn::resolve_name("cone").is_none());
    }
}
