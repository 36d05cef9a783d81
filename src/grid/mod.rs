//! Spatial grid and setup validation.
//!
//! The [`Grid`] fixes the number of cells and their physical size for the
//! whole run. [`validate_setup`] checks every scalar parameter before any
//! field storage is allocated.

mod types;
mod validate;

pub use types::*;
pub use validate::{validate_config, validate_profile, validate_setup};
