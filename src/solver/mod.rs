//! Leapfrog time stepping.
//!
//! This module provides the numerical engine: a scalar 1-D Yee scheme for
//! the `Ex`/`Hy` field pair.
//!
//! ## Update equations
//!
//! With Courant factor `c = c0 dt / dx` and the per-cell coefficients of
//! [`MaterialProfile`](crate::components::MaterialProfile):
//!
//! ```text
//! Ex[k] <- ca[k] Ex[k] + cb[k] (Hy[k-1] - Hy[k])      k = 1 .. width-1
//! Hy[k] <- Hy[k] + c (Ex[k] - Ex[k+1])                k = 0 .. width-2
//! ```
//!
//! The source is injected between the two half steps and the absorbing
//! boundary drives `Ex[0]` and `Ex[width-1]` before `Hy` is updated.

mod simulator;
mod snapshot;

pub use simulator::FieldSolver;
pub use snapshot::{FieldSnapshot, OwnedSnapshot};
