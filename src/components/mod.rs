//! Building blocks of the one-dimensional solver.
//!
//! This module provides:
//! - Material: two-region permittivity/conductivity layout and the `ca`/`cb`
//!   coefficient profile derived from it
//! - Sources: Gaussian, sinusoidal and impulse waveforms with hard or soft
//!   injection
//! - Boundary: the two-step edge delay of the Mur absorbing condition

mod boundary;
mod material;
mod sources;

pub use boundary::{EdgeDelay, MurBoundary};
pub use material::{MaterialParams, MaterialProfile};
pub use sources::{Injection, PulseSource, SourceParams, Waveform};
