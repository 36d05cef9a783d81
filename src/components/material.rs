//! Dielectric profile and the per-cell update coefficients.
//!
//! Every cell carries a decay coefficient `ca` and an update coefficient
//! `cb` for the electric field:
//!
//! ```text
//! Ex[k] = ca[k] * Ex[k] + cb[k] * (Hy[k-1] - Hy[k])
//! ```
//!
//! Cells before the dielectric start use the vacuum pair
//! (`epsilon1`, `epsilon1 * cfl`). From the dielectric start onward the
//! lossy pair is derived from the loss factor
//! `eaf = dt * sigma / (2 * epsz * epsilon2)`.

use serde::{Deserialize, Serialize};

use crate::VACUUM_PERMITTIVITY;

/// Physical parameters of the two-region material layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Relative permittivity of the leading region
    pub epsilon1: f64,
    /// Relative permittivity of the lossy dielectric
    pub epsilon2: f64,
    /// Conductivity of the lossy dielectric in S/m
    pub sigma: f64,
    /// First cell of the dielectric (`width` means no dielectric at all)
    pub dielectric_start: usize,
}

impl MaterialParams {
    /// Pure vacuum across a grid of `width` cells.
    pub fn vacuum(width: usize) -> Self {
        Self {
            epsilon1: 1.0,
            epsilon2: 1.0,
            sigma: 0.0,
            dielectric_start: width,
        }
    }

    /// Vacuum followed by a lossy dielectric starting at `dielectric_start`.
    pub fn lossy_dielectric(dielectric_start: usize, epsilon2: f64, sigma: f64) -> Self {
        Self {
            epsilon1: 1.0,
            epsilon2,
            sigma,
            dielectric_start,
        }
    }

    /// The reference layout: dielectric over the last quarter of the grid.
    pub fn reference(width: usize) -> Self {
        Self::lossy_dielectric(width * 3 / 4, 4.0, 0.04)
    }

    /// Loss factor of the dielectric region for time step `dt`.
    pub fn loss_factor(&self, dt: f64) -> f64 {
        dt * self.sigma / (2.0 * VACUUM_PERMITTIVITY * self.epsilon2)
    }
}

/// Precomputed `ca`/`cb` coefficients, one pair per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProfile {
    ca: Vec<f64>,
    cb: Vec<f64>,
    cfl_factor: f64,
}

impl MaterialProfile {
    /// Build the coefficient profile for a grid of `width` cells.
    ///
    /// # Arguments
    /// * `width` - Number of cells
    /// * `params` - Region layout and material constants
    /// * `cfl_factor` - Courant factor
    /// * `dt` - Time step in seconds
    pub fn new(width: usize, params: &MaterialParams, cfl_factor: f64, dt: f64) -> Self {
        let eaf = params.loss_factor(dt);
        let lossy_ca = (1.0 - eaf) / (1.0 + eaf);
        let lossy_cb = cfl_factor / (params.epsilon2 * (1.0 + eaf));

        let start = params.dielectric_start.min(width);
        let mut ca = vec![params.epsilon1; width];
        let mut cb = vec![params.epsilon1 * cfl_factor; width];
        ca[start..].fill(lossy_ca);
        cb[start..].fill(lossy_cb);

        Self { ca, cb, cfl_factor }
    }

    /// Field-decay coefficients.
    pub fn ca(&self) -> &[f64] {
        &self.ca
    }

    /// Field-update coefficients.
    pub fn cb(&self) -> &[f64] {
        &self.cb
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.ca.len()
    }

    /// Check if the profile covers no cells.
    pub fn is_empty(&self) -> bool {
        self.ca.is_empty()
    }

    /// Courant factor the profile was built with.
    pub fn cfl_factor(&self) -> f64 {
        self.cfl_factor
    }

    /// Effective relative permittivity per cell, `cfl / cb[k]`.
    ///
    /// Raw values: `1` in vacuum, `epsilon2 * (1 + eaf)` in the dielectric.
    /// A plotter rescales them for its overlay, e.g. `(eps - 1) / 3` so the
    /// reference dielectric sits at height 1.
    pub fn relative_permittivity(&self) -> Vec<f64> {
        self.cb.iter().map(|&cb| self.cfl_factor / cb).collect()
    }

    /// Smallest and largest `ca` in the profile.
    pub fn ca_range(&self) -> (f64, f64) {
        min_max(&self.ca)
    }

    /// Smallest and largest `cb` in the profile.
    pub fn cb_range(&self) -> (f64, f64) {
        min_max(&self.cb)
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
