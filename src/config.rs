//! Run configuration.
//!
//! [`SimulationConfig`] collects every scalar a run needs. Its default is the
//! reference setup: a 350-cell grid resolving 450 nm with 20 cells, a Gaussian
//! pulse launched a quarter of the way in, and a lossy dielectric
//! (`epsilon2 = 4`, `sigma = 0.04`) over the last quarter.
//!
//! A material or source left out of a configuration follows the same
//! quarter layout for whatever `width` the configuration ends up with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::{MaterialParams, SourceParams};
use crate::error::{FdtdError, Result};
use crate::grid::{Grid, DEFAULT_CELLS_PER_WAVELENGTH};

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 350;

/// Default minimum wavelength in metres.
pub const DEFAULT_LAMBDA_MIN: f64 = 450e-9;

/// Default Courant factor.
pub const DEFAULT_CFL_FACTOR: f64 = 0.5;

/// Default number of steps a driver runs.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of cells
    pub width: usize,
    /// Shortest wavelength the grid must resolve, in metres
    pub lambda_min: f64,
    /// Cells per `lambda_min`
    pub cells_per_wavelength: f64,
    /// Courant-Friedrichs-Lewy factor
    pub cfl_factor: f64,
    /// Material layout; `None` places the reference dielectric at `width * 3 / 4`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialParams>,
    /// Source placement and waveform; `None` places the reference pulse at `width / 4`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceParams>,
    /// Number of steps a driver should run
    pub max_iterations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::reference(DEFAULT_WIDTH)
    }
}

impl SimulationConfig {
    /// Create the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference layout scaled to a grid of `width` cells.
    pub fn reference(width: usize) -> Self {
        Self {
            width,
            lambda_min: DEFAULT_LAMBDA_MIN,
            cells_per_wavelength: DEFAULT_CELLS_PER_WAVELENGTH,
            cfl_factor: DEFAULT_CFL_FACTOR,
            material: None,
            source: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their reference values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FdtdError::ConfigReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_json(&text).map_err(|e| match e {
            FdtdError::ConfigParseError { message, .. } => FdtdError::ConfigParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| FdtdError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Set the material layout.
    pub fn with_material(mut self, material: MaterialParams) -> Self {
        self.material = Some(material);
        self
    }

    /// Set the source.
    pub fn with_source(mut self, source: SourceParams) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the Courant factor.
    pub fn with_cfl_factor(mut self, cfl_factor: f64) -> Self {
        self.cfl_factor = cfl_factor;
        self
    }

    /// Set the number of steps a driver should run.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Material layout, falling back to the reference layout for `width`.
    pub fn material(&self) -> MaterialParams {
        self.material.unwrap_or_else(|| MaterialParams::reference(self.width))
    }

    /// Source, falling back to the reference source for `width`.
    ///
    /// A sinusoid without a frequency gets `c0 / lambda_min`.
    pub fn source(&self) -> SourceParams {
        self.source
            .unwrap_or_else(|| SourceParams::reference(self.width))
            .resolve(self.lambda_min)
    }

    /// The grid described by this configuration.
    pub fn grid(&self) -> Grid {
        Grid::from_wavelength(self.width, self.lambda_min, self.cells_per_wavelength)
    }

    /// Time step in seconds.
    pub fn time_step(&self) -> f64 {
        self.grid().time_step(self.cfl_factor)
    }
}
