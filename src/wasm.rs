//! WASM bindings for Wavefront Core.
//!
//! This module lets a browser animation loop poll the solver and draw the
//! two field traces.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmFieldSolver } from 'wavefront_core';
//!
//! await init();
//!
//! const solver = new WasmFieldSolver(JSON.stringify({ width: 200 }));
//! const profile = solver.relative_permittivity();
//!
//! function frame() {
//!   const step = solver.step();
//!   drawLine(exCanvas, solver.ex());
//!   drawLine(hyCanvas, solver.hy());
//!   label.textContent = solver.annotation();
//!   if (step < 10000) requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use wasm_bindgen::prelude::*;

use crate::config::SimulationConfig;
use crate::error::FdtdError;
use crate::solver::FieldSolver;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible field solver.
///
/// Wraps the native [`FieldSolver`] and copies field snapshots out as
/// `Float64Array`s.
#[wasm_bindgen]
pub struct WasmFieldSolver {
    solver: FieldSolver,
}

#[wasm_bindgen]
impl WasmFieldSolver {
    /// Create a solver from a JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON object; missing fields use the reference setup
    ///
    /// # Returns
    /// A new `WasmFieldSolver` or an error naming the invalid parameter.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmFieldSolver, JsValue> {
        let config = SimulationConfig::from_json(config_json).map_err(to_js)?;
        let solver = FieldSolver::from_config(&config).map_err(to_js)?;
        Ok(WasmFieldSolver { solver })
    }

    /// Advance one step and return the number of steps completed.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f64 {
        self.solver.step().step as f64
    }

    /// Advance `steps` steps and return the number of steps completed.
    #[wasm_bindgen]
    pub fn advance(&mut self, steps: u32) -> f64 {
        self.solver.advance(steps as u64).step as f64
    }

    /// Copy of the electric field.
    #[wasm_bindgen]
    pub fn ex(&self) -> Vec<f64> {
        self.solver.snapshot().ex.to_vec()
    }

    /// Copy of the magnetic field.
    #[wasm_bindgen]
    pub fn hy(&self) -> Vec<f64> {
        self.solver.snapshot().hy.to_vec()
    }

    /// Effective relative permittivity per cell, for the profile overlay.
    #[wasm_bindgen]
    pub fn relative_permittivity(&self) -> Vec<f64> {
        self.solver.profile().relative_permittivity()
    }

    /// Iteration and material labels.
    #[wasm_bindgen]
    pub fn annotation(&self) -> String {
        self.solver.annotation()
    }

    /// Zero the fields and restart the clock.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.solver.reset();
    }

    /// Number of cells.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.solver.grid().width
    }
}

fn to_js(err: FdtdError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}
