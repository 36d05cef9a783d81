//! # Wavefront Core
//!
//! A one-dimensional FDTD solver for electromagnetic wave propagation.
//!
//! This library provides:
//! - A leapfrog (Yee) update of the `Ex`/`Hy` field pair on a fixed grid
//! - A two-region material layout: vacuum followed by a lossy dielectric
//! - Gaussian, sinusoidal and impulse sources with hard or soft injection
//! - A first-order Mur absorbing boundary on both grid edges
//! - Frame streaming for external plotters (CLI only)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Run configuration and the reference setup
//! - [`grid`] - Grid geometry and setup validation
//! - [`components`] - Material profile, sources and boundary
//! - [`solver`] - The time-stepping engine
//! - [`output`] - Frame output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! wavefront --format json --every 10 > frames.jsonl
//! ```
//!
//! ### Library
//!
//! ```
//! use wavefront_core::{FieldSolver, SimulationConfig};
//!
//! let mut solver = FieldSolver::from_config(&SimulationConfig::default()).unwrap();
//! let snapshot = solver.step();
//! assert_eq!(snapshot.step, 1);
//! assert_eq!(snapshot.ex.len(), 350);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmFieldSolver } from 'wavefront_core';
//!
//! const solver = new WasmFieldSolver('{}');
//! requestAnimationFrame(function frame() {
//!   solver.step();
//!   draw(solver.ex(), solver.hy());
//!   requestAnimationFrame(frame);
//! });
//! ```
//!
//! ## Time Stepping
//!
//! Each call to [`FieldSolver::step`] performs, in order:
//!
//! 1. Update `Ex` on all cells but the first from the previous `Hy`
//! 2. Inject the source value at the source cell
//! 3. Drive both edge cells from their neighbours two steps back
//! 4. Update `Hy` from the `Ex` just computed
//!
//! The Courant factor is 0.5 in the reference setup, so a wave crosses one
//! cell every two steps.

pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod solver;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use config::SimulationConfig;
pub use error::{FdtdError, Result};
pub use solver::{FieldSnapshot, FieldSolver};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmFieldSolver;

/// Speed of light in vacuum (m/s), as used for the reference setup
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Vacuum permittivity (F/m), as used for the reference setup
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
