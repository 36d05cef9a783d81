//! Setup validation.

use log::warn;

use crate::components::{MaterialParams, MaterialProfile, SourceParams, Waveform};
use crate::config::SimulationConfig;
use crate::error::{FdtdError, Result};

use super::Grid;

/// Smallest grid that still has an interior neighbour for both edges.
pub const MIN_WIDTH: usize = 3;

/// Validate the inputs a [`Grid`] is derived from.
///
/// `cell_size = lambda_min / cells_per_wavelength` hides the sign of each
/// input, so both are checked on their own before the grid is built.
pub fn validate_config(config: &SimulationConfig) -> Result<()> {
    check_positive("lambda_min", config.lambda_min)?;
    check_positive("cells_per_wavelength", config.cells_per_wavelength)?;

    if config.max_iterations == 0 {
        return Err(FdtdError::invalid("max_iterations", "must be at least 1"));
    }

    Ok(())
}

/// Validate the scalar parameters of a run.
///
/// Checks:
/// - The grid has at least [`MIN_WIDTH`] cells and a positive cell size
/// - The Courant factor lies in (0, 1]
/// - Source and dielectric indices fall inside the grid
/// - Permittivities are positive, conductivity is non-negative
/// - Waveform parameters are usable
pub fn validate_setup(
    grid: &Grid,
    material: &MaterialParams,
    source: &SourceParams,
    cfl_factor: f64,
) -> Result<()> {
    if grid.width < MIN_WIDTH {
        return Err(FdtdError::invalid(
            "width",
            format!("must be at least {}, got {}", MIN_WIDTH, grid.width),
        ));
    }

    if !(grid.cell_size.is_finite() && grid.cell_size > 0.0) {
        return Err(FdtdError::invalid(
            "cell_size",
            format!("must be positive, got {}", grid.cell_size),
        ));
    }

    if !(cfl_factor > 0.0 && cfl_factor <= 1.0) {
        return Err(FdtdError::invalid(
            "cfl_factor",
            format!("must lie in (0, 1], got {}", cfl_factor),
        ));
    }

    if source.position >= grid.width {
        return Err(FdtdError::invalid(
            "source.position",
            format!("{} is outside a grid of {} cells", source.position, grid.width),
        ));
    }

    if grid.is_edge(source.position) {
        warn!(
            "Source at edge cell {} will be overwritten by the absorbing boundary",
            source.position
        );
    }

    if material.dielectric_start > grid.width {
        return Err(FdtdError::invalid(
            "material.dielectric_start",
            format!(
                "{} is past the end of a grid of {} cells",
                material.dielectric_start, grid.width
            ),
        ));
    }

    check_positive("material.epsilon1", material.epsilon1)?;
    check_positive("material.epsilon2", material.epsilon2)?;

    if !(material.sigma.is_finite() && material.sigma >= 0.0) {
        return Err(FdtdError::invalid(
            "material.sigma",
            format!("must be non-negative, got {}", material.sigma),
        ));
    }

    match source.waveform {
        Waveform::Gaussian { t0, spread } => {
            if !t0.is_finite() {
                return Err(FdtdError::invalid("source.waveform.t0", "must be finite"));
            }
            check_positive("source.waveform.spread", spread)?;
        }
        Waveform::Sinusoid { frequency } => match frequency {
            Some(frequency) => check_positive("source.waveform.frequency", frequency)?,
            None => {
                return Err(FdtdError::invalid(
                    "source.waveform.frequency",
                    "unresolved; set it or build from a SimulationConfig",
                ))
            }
        },
        Waveform::Impulse { amplitude, .. } => {
            if !amplitude.is_finite() {
                return Err(FdtdError::invalid(
                    "source.waveform.amplitude",
                    "must be finite",
                ));
            }
        }
    }

    Ok(())
}

/// Validate a built coefficient profile.
///
/// Every `ca` must lie in (0, 1] and every `cb` in [0, cfl].
pub fn validate_profile(profile: &MaterialProfile, material: &MaterialParams) -> Result<()> {
    let cfl_factor = profile.cfl_factor();

    for (cell, (&ca, &cb)) in profile.ca().iter().zip(profile.cb()).enumerate() {
        let param = if cell < material.dielectric_start {
            "material.epsilon1"
        } else {
            "material.epsilon2/sigma"
        };

        if !(ca.is_finite() && ca > 0.0 && ca <= 1.0) {
            return Err(FdtdError::invalid(
                param,
                format!("decay coefficient ca = {} at cell {} is outside (0, 1]", ca, cell),
            ));
        }

        if !(cb.is_finite() && cb >= 0.0 && cb <= cfl_factor) {
            return Err(FdtdError::invalid(
                param,
                format!(
                    "update coefficient cb = {} at cell {} is outside [0, {}]",
                    cb, cell, cfl_factor
                ),
            ));
        }
    }

    Ok(())
}

fn check_positive(param: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FdtdError::invalid(
            param,
            format!("must be positive, got {}", value),
        ))
    }
}
