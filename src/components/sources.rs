//! Source waveforms and their injection into the electric field.
//!
//! A source sits on one cell and is evaluated once per step, after the
//! electric field update and before the boundary step.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::SPEED_OF_LIGHT;

/// Time dependence of a source, evaluated on the step index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Waveform {
    /// Gaussian pulse `exp(-cfl * ((t0 - n) / spread)^2)`
    Gaussian { t0: f64, spread: f64 },
    /// Continuous wave `sin(2π f dt n)`; `frequency` defaults to `c0 / lambda_min`
    Sinusoid {
        #[serde(default)]
        frequency: Option<f64>,
    },
    /// `amplitude` at exactly one step, zero everywhere else
    Impulse { amplitude: f64, step: u64 },
}

impl Default for Waveform {
    fn default() -> Self {
        Self::Gaussian {
            t0: 15.0,
            spread: 12.0,
        }
    }
}

impl Waveform {
    /// Continuous wave whose free-space wavelength is `lambda`.
    pub fn sinusoid_for_wavelength(lambda: f64) -> Self {
        Self::Sinusoid {
            frequency: Some(SPEED_OF_LIGHT / lambda),
        }
    }

    /// Fill in a missing sinusoid frequency from the grid's `lambda_min`.
    pub fn resolve(self, lambda_min: f64) -> Self {
        match self {
            Self::Sinusoid { frequency: None } => Self::sinusoid_for_wavelength(lambda_min),
            other => other,
        }
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian { .. } => "gaussian",
            Self::Sinusoid { .. } => "sinusoid",
            Self::Impulse { .. } => "impulse",
        }
    }
}

/// How the source value enters the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Injection {
    /// Replace the field value at the source cell
    #[default]
    Hard,
    /// Add to the freshly updated field value
    Soft,
}

/// User-facing source placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceParams {
    /// Cell index the source drives
    pub position: usize,
    /// Time dependence
    pub waveform: Waveform,
    /// Hard or soft injection
    pub injection: Injection,
}

impl SourceParams {
    /// A hard source at `position`.
    pub fn hard(position: usize, waveform: Waveform) -> Self {
        Self {
            position,
            waveform,
            injection: Injection::Hard,
        }
    }

    /// A soft source at `position`.
    pub fn soft(position: usize, waveform: Waveform) -> Self {
        Self {
            position,
            waveform,
            injection: Injection::Soft,
        }
    }

    /// The reference source: a Gaussian pulse a quarter of the way in.
    pub fn reference(width: usize) -> Self {
        Self::hard(width / 4, Waveform::default())
    }

    /// Resolve waveform defaults against the grid's `lambda_min`.
    pub fn resolve(self, lambda_min: f64) -> Self {
        Self {
            waveform: self.waveform.resolve(lambda_min),
            ..self
        }
    }
}

/// A source resolved against the run's Courant factor and time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSource {
    params: SourceParams,
    cfl_factor: f64,
    dt: f64,
}

impl PulseSource {
    /// Resolve `params` for a run with the given Courant factor and time step.
    pub fn new(params: SourceParams, cfl_factor: f64, dt: f64) -> Self {
        Self {
            params,
            cfl_factor,
            dt,
        }
    }

    /// Cell index the source drives.
    pub fn position(&self) -> usize {
        self.params.position
    }

    /// Source parameters this pulse was built from.
    pub fn params(&self) -> &SourceParams {
        &self.params
    }

    /// Source value at step `n`.
    ///
    /// Pure in `n` and the configuration.
    pub fn pulse(&self, n: u64) -> f64 {
        let t = n as f64;
        match self.params.waveform {
            Waveform::Gaussian { t0, spread } => {
                (-self.cfl_factor * ((t0 - t) / spread).powi(2)).exp()
            }
            Waveform::Sinusoid {
                frequency: Some(frequency),
            } => (2.0 * PI * frequency * self.dt * t).sin(),
            // Rejected by setup validation
            Waveform::Sinusoid { frequency: None } => 0.0,
            Waveform::Impulse { amplitude, step } => {
                if n == step {
                    amplitude
                } else {
                    0.0
                }
            }
        }
    }

    /// Write the step-`n` source value into `ex`.
    pub fn inject(&self, ex: &mut [f64], n: u64) {
        let value = self.pulse(n);
        let cell = &mut ex[self.params.position];
        match self.params.injection {
            Injection::Hard => *cell = value,
            Injection::Soft => *cell += value,
        }
    }
}
