//! Read-only views of the field state after a step.

use serde::Serialize;

/// Borrowed view of both fields after a step.
///
/// The view lives only until the next call that mutates the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSnapshot<'a> {
    /// Steps completed so far
    pub step: u64,
    /// Electric field, one value per cell
    pub ex: &'a [f64],
    /// Magnetic field, one value per cell face
    pub hy: &'a [f64],
}

impl<'a> FieldSnapshot<'a> {
    /// Largest electric field magnitude.
    pub fn peak_ex(&self) -> f64 {
        peak(self.ex)
    }

    /// Largest magnetic field magnitude.
    pub fn peak_hy(&self) -> f64 {
        peak(self.hy)
    }

    /// Check that every sample is finite.
    pub fn is_finite(&self) -> bool {
        self.ex.iter().chain(self.hy).all(|v| v.is_finite())
    }

    /// Copy the view into an owned snapshot.
    pub fn capture(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            step: self.step,
            ex: self.ex.to_vec(),
            hy: self.hy.to_vec(),
        }
    }
}

/// Owned copy of a [`FieldSnapshot`], for keeping frames around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedSnapshot {
    pub step: u64,
    pub ex: Vec<f64>,
    pub hy: Vec<f64>,
}

fn peak(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}
