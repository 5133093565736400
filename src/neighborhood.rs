//! Neighborhood weighting functions.
//!
//! A neighborhood function maps the grid distance between a unit and the
//! best matching unit, together with the current radius, to an update weight.

use std::fmt;

/// Weighting applied to a unit based on its distance from the BMU.
pub trait Neighborhood: fmt::Debug + Send + Sync {
    /// Returns the weight for a unit at `distance` given `radius`.
    fn weight(&self, distance: f64, radius: f64) -> f64;
}

/// Weight for a zero radius: only the BMU itself is updated.
#[inline]
fn collapsed(distance: f64) -> f64 {
    if distance == 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Gaussian kernel `exp(-d^2 / 2r^2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl Neighborhood for Gaussian {
    fn weight(&self, distance: f64, radius: f64) -> f64 {
        if radius <= 0.0 {
            return collapsed(distance);
        }
        (-distance * distance / (2.0 * radius * radius)).exp()
    }
}

/// Full weight inside the radius, none outside.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bubble;

impl Neighborhood for Bubble {
    fn weight(&self, distance: f64, radius: f64) -> f64 {
        if distance <= radius {
            1.0
        } else {
            0.0
        }
    }
}

/// Mexican hat kernel `(1 - d^2/r^2) * exp(-d^2 / 2r^2)`.
///
/// Goes negative beyond the radius, pushing distant units away.
#[derive(Debug, Clone, Copy, Default)]
pub struct MexicanHat;

impl Neighborhood for MexicanHat {
    fn weight(&self, distance: f64, radius: f64) -> f64 {
        if radius <= 0.0 {
            return collapsed(distance);
        }
        let ratio = distance * distance / (radius * radius);
        (1.0 - ratio) * (-ratio / 2.0).exp()
    }
}
