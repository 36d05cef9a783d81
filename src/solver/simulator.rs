//! Main solver interface.

use log::debug;

use crate::components::{MaterialParams, MaterialProfile, MurBoundary, PulseSource, SourceParams};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::{validate_config, validate_profile, validate_setup, Grid};

use super::FieldSnapshot;

/// One-dimensional FDTD field solver.
///
/// Owns the electric field on `width` cells and the magnetic field on the
/// `width - 1` faces between them, and advances both with the leapfrog
/// scheme. The solver is not reentrant: drive it from one thread.
#[derive(Debug, Clone)]
pub struct FieldSolver {
    /// The grid being simulated
    grid: Grid,
    /// Material layout the profile was built from
    material: MaterialParams,
    /// Per-cell `ca`/`cb` coefficients
    profile: MaterialProfile,
    /// Source resolved against the run's timing
    source: PulseSource,
    /// Edge delays of the absorbing boundary
    boundary: MurBoundary,
    /// Electric field x-component
    ex: Vec<f64>,
    /// Magnetic field y-component
    hy: Vec<f64>,
    /// Steps completed
    step: u64,
    /// Courant factor
    cfl_factor: f64,
    /// Time step in seconds
    dt: f64,
}

impl FieldSolver {
    /// Create a solver with zeroed fields.
    ///
    /// # Arguments
    /// * `grid` - Cell count and cell size
    /// * `material` - Vacuum/dielectric layout
    /// * `source` - Source placement and waveform
    /// * `cfl_factor` - Courant factor, in (0, 1]
    ///
    /// # Errors
    /// Returns [`FdtdError::InvalidConfiguration`](crate::FdtdError::InvalidConfiguration)
    /// naming the first parameter that violates its constraint.
    pub fn initialize(
        grid: Grid,
        material: MaterialParams,
        source: SourceParams,
        cfl_factor: f64,
    ) -> Result<Self> {
        validate_setup(&grid, &material, &source, cfl_factor)?;

        let dt = grid.time_step(cfl_factor);
        let profile = MaterialProfile::new(grid.width, &material, cfl_factor, dt);
        validate_profile(&profile, &material)?;

        let (ca_lo, ca_hi) = profile.ca_range();
        let (cb_lo, cb_hi) = profile.cb_range();
        debug!("Grid {}, dt = {:.4e} s, cfl = {}", grid, dt, cfl_factor);
        debug!(
            "ca in [{:.6}, {:.6}], cb in [{:.6}, {:.6}], dielectric from cell {}",
            ca_lo, ca_hi, cb_lo, cb_hi, material.dielectric_start
        );
        debug!(
            "{} {:?} source at cell {}",
            source.waveform.name(),
            source.injection,
            source.position
        );

        Ok(Self {
            grid,
            material,
            profile,
            source: PulseSource::new(source, cfl_factor, dt),
            boundary: MurBoundary::new(),
            ex: vec![0.0; grid.width],
            hy: vec![0.0; grid.face_count()],
            step: 0,
            cfl_factor,
            dt,
        })
    }

    /// Create a solver from a run configuration.
    ///
    /// Missing material and source fall back to the reference layout for the
    /// configured width.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        validate_config(config)?;
        Self::initialize(
            config.grid(),
            config.material(),
            config.source(),
            config.cfl_factor,
        )
    }

    /// Advance both fields by one time step.
    ///
    /// Order within the step:
    /// 1. Electric field on cells `1..width`
    /// 2. Source injection
    /// 3. Absorbing boundary on both edge cells
    /// 4. Magnetic field on faces `0..width-1`, from the fresh electric field
    pub fn step(&mut self) -> FieldSnapshot<'_> {
        let last = self.grid.last_cell();
        let ca = self.profile.ca();
        let cb = self.profile.cb();

        for k in 1..last {
            self.ex[k] = ca[k] * self.ex[k] + cb[k] * (self.hy[k - 1] - self.hy[k]);
        }
        // The face past the last cell carries no field
        self.ex[last] = ca[last] * self.ex[last] + cb[last] * self.hy[last - 1];

        self.source.inject(&mut self.ex, self.step);

        self.boundary.apply(&mut self.ex);

        for k in 0..last {
            self.hy[k] += self.cfl_factor * (self.ex[k] - self.ex[k + 1]);
        }

        self.step += 1;

        self.snapshot()
    }

    /// Run `steps` time steps and return the final state.
    pub fn advance(&mut self, steps: u64) -> FieldSnapshot<'_> {
        for _ in 0..steps {
            self.step();
        }
        self.snapshot()
    }

    /// View of the current state without stepping.
    pub fn snapshot(&self) -> FieldSnapshot<'_> {
        FieldSnapshot {
            step: self.step,
            ex: &self.ex,
            hy: &self.hy,
        }
    }

    /// Zero the fields, the boundary and the clock.
    ///
    /// Material and source are kept, so a reset run repeats bit for bit.
    pub fn reset(&mut self) {
        self.ex.fill(0.0);
        self.hy.fill(0.0);
        self.boundary.reset();
        self.step = 0;
    }

    /// Text labels a plot shows next to the traces.
    pub fn annotation(&self) -> String {
        format!(
            "Iteration step = {}, Eps = {}, Sigma = {}",
            self.step, self.material.epsilon2, self.material.sigma
        )
    }

    /// Get the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the material layout.
    pub fn material(&self) -> &MaterialParams {
        &self.material
    }

    /// Get the coefficient profile.
    pub fn profile(&self) -> &MaterialProfile {
        &self.profile
    }

    /// Get the resolved source.
    pub fn source(&self) -> &PulseSource {
        &self.source
    }

    /// Get the boundary state.
    pub fn boundary(&self) -> &MurBoundary {
        &self.boundary
    }

    /// Steps completed so far.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Get the Courant factor.
    pub fn cfl_factor(&self) -> f64 {
        self.cfl_factor
    }

    /// Get the time step in seconds.
    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// Simulated time in seconds.
    pub fn elapsed_time(&self) -> f64 {
        self.step as f64 * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Waveform;
    use crate::error::FdtdError;
    use approx::assert_relative_eq;

    fn impulse(amplitude: f64) -> Waveform {
        Waveform::Impulse { amplitude, step: 0 }
    }

    /// Ten vacuum cells, unit impulse on cell 2 at step 0.
    fn ten_cell_vacuum() -> FieldSolver {
        FieldSolver::initialize(
            Grid::new(10, 22.5e-9),
            MaterialParams::vacuum(10),
            SourceParams::hard(2, impulse(1.0)),
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let solver = FieldSolver::from_config(&SimulationConfig::new()).unwrap();
        let snapshot = solver.snapshot();

        assert_eq!(snapshot.step, 0);
        assert_eq!(snapshot.ex.len(), 350);
        assert_eq!(snapshot.hy.len(), 349);
        assert_eq!(solver.profile().len(), 350);
        assert!(snapshot.ex.iter().chain(snapshot.hy).all(|&v| v == 0.0));
        assert_eq!(solver.boundary().low().held(), [0.0, 0.0]);
        assert_eq!(solver.boundary().high().held(), [0.0, 0.0]);
    }

    #[test]
    fn test_zero_input_stays_zero() {
        let config = SimulationConfig::new().with_source(SourceParams::hard(87, impulse(0.0)));
        let mut solver = FieldSolver::from_config(&config).unwrap();

        for _ in 0..2_000 {
            let snapshot = solver.step();
            assert!(snapshot.ex.iter().chain(snapshot.hy).all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_first_step_scenario() {
        let mut solver = ten_cell_vacuum();
        let snapshot = solver.step();

        assert_eq!(snapshot.step, 1);
        assert_eq!(snapshot.ex, &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        // The magnetic update in the same step already sees the source
        assert_eq!(snapshot.hy, &[0.0, -0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_second_step_scenario() {
        let mut solver = ten_cell_vacuum();
        solver.step();
        let snapshot = solver.step();

        assert_eq!(snapshot.step, 2);
        // Source cell is overwritten with the zero pulse value
        assert_eq!(snapshot.ex, &[0.0, 0.25, 0.0, 0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(snapshot.hy, &[-0.125, -0.375, 0.375, 0.125, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(solver.boundary().low().held(), [0.0, 0.25]);
    }

    #[test]
    fn test_propagates_one_cell_per_step() {
        let mut solver = FieldSolver::initialize(
            Grid::new(40, 22.5e-9),
            MaterialParams::vacuum(40),
            SourceParams::hard(20, impulse(1.0)),
            0.5,
        )
        .unwrap();

        for n in 1..=15u64 {
            let snapshot = solver.step();
            let reach = (n - 1) as usize;

            for (k, &ex) in snapshot.ex.iter().enumerate() {
                if k.abs_diff(20) > reach {
                    assert_eq!(ex, 0.0, "ex[{}] nonzero after {} steps", k, n);
                }
            }
            if n >= 2 {
                assert_ne!(snapshot.ex[20 + reach], 0.0);
                assert_ne!(snapshot.ex[20 - reach], 0.0);
            }
        }
    }

    #[test]
    fn test_boundary_trails_neighbour_by_two_steps() {
        let mut solver = FieldSolver::from_config(&SimulationConfig::new()).unwrap();
        let last = solver.grid().last_cell();

        // history[s + 1] holds (ex[1], ex[last - 1]) after step s
        let mut history = vec![(0.0, 0.0); 2];
        for s in 1..=1_500usize {
            let snapshot = solver.step();
            assert_eq!(snapshot.ex[0], history[s - 1].0, "low edge at step {}", s);
            assert_eq!(snapshot.ex[last], history[s - 1].1, "high edge at step {}", s);
            history.push((snapshot.ex[1], snapshot.ex[last - 1]));
        }
    }

    #[test]
    fn test_hard_source_overwrites() {
        let mut solver = FieldSolver::from_config(&SimulationConfig::new()).unwrap();
        let source = *solver.source();

        for _ in 0..500 {
            let snapshot = solver.step();
            let n = snapshot.step - 1;
            assert_eq!(snapshot.ex[source.position()], source.pulse(n));
        }
    }

    #[test]
    fn test_soft_source_adds() {
        let mut hard = ten_cell_vacuum();
        let mut soft = FieldSolver::initialize(
            Grid::new(10, 22.5e-9),
            MaterialParams::vacuum(10),
            SourceParams::soft(2, impulse(1.0)),
            0.5,
        )
        .unwrap();

        // From zero fields the first step is identical
        assert_eq!(hard.step(), soft.step());

        // Second step: soft keeps the updated value 1 + 0.5 * (-0.5 - 0.5)
        let ex = soft.step().ex[2];
        assert_eq!(ex, 0.5);
        assert_eq!(hard.step().ex[2], 0.0);
    }

    #[test]
    fn test_deterministic_and_reset() {
        let config = SimulationConfig::new();
        let mut a = FieldSolver::from_config(&config).unwrap();
        let mut b = FieldSolver::from_config(&config).unwrap();

        let first = a.advance(777).capture();
        assert_eq!(first, b.advance(777).capture());

        a.advance(100);
        a.reset();
        assert_eq!(a.step_count(), 0);
        assert_eq!(a.advance(777).capture(), first);
    }

    #[test]
    fn test_advance_matches_single_steps() {
        let config = SimulationConfig::reference(120);
        let mut stepped = FieldSolver::from_config(&config).unwrap();
        let mut advanced = FieldSolver::from_config(&config).unwrap();

        for _ in 0..300 {
            stepped.step();
        }
        assert_eq!(advanced.advance(300), stepped.snapshot());
    }

    #[test]
    fn test_reference_run_stays_bounded() {
        let config = SimulationConfig::new();
        let mut solver = FieldSolver::from_config(&config).unwrap();

        for _ in 0..config.max_iterations {
            let snapshot = solver.step();
            assert!(snapshot.is_finite());
            assert!(snapshot.peak_ex() <= 5.0, "ex blew up at step {}", snapshot.step);
            assert!(snapshot.peak_hy() <= 5.0, "hy blew up at step {}", snapshot.step);
        }
        assert_eq!(solver.step_count(), 10_000);
    }

    #[test]
    fn test_reference_coefficient_bounds() {
        let solver = FieldSolver::from_config(&SimulationConfig::new()).unwrap();
        let cfl = solver.cfl_factor();

        for (&ca, &cb) in solver.profile().ca().iter().zip(solver.profile().cb()) {
            assert!(ca > 0.0 && ca <= 1.0);
            assert!(cb >= 0.0 && cb <= cfl);
        }
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let err = FieldSolver::from_config(&SimulationConfig::reference(2)).unwrap_err();
        assert_eq!(err.param(), Some("width"));

        let config = SimulationConfig::new().with_source(SourceParams::hard(
            10,
            Waveform::Gaussian {
                t0: 40.0,
                spread: -1.0,
            },
        ));
        let err = FieldSolver::from_config(&config).unwrap_err();
        assert!(matches!(err, FdtdError::InvalidConfiguration { .. }));

        let config = SimulationConfig::new()
            .with_material(MaterialParams::lossy_dielectric(300, 4.0, 1e9));
        let err = FieldSolver::from_config(&config).unwrap_err();
        assert_eq!(err.param(), Some("material.epsilon2/sigma"));
    }

    #[test]
    fn test_width_only_config_scales_layout() {
        let config = SimulationConfig::from_json(r#"{"width":200}"#).unwrap();
        let solver = FieldSolver::from_config(&config).unwrap();

        assert_eq!(solver.grid().width, 200);
        assert_eq!(solver.material().dielectric_start, 150);
        assert_eq!(solver.source().position(), 50);
    }

    #[test]
    fn test_config_inputs_are_checked_before_the_grid() {
        let config = SimulationConfig {
            lambda_min: -450e-9,
            cells_per_wavelength: -20.0,
            ..SimulationConfig::new()
        };
        let err = FieldSolver::from_config(&config).unwrap_err();
        assert_eq!(err.param(), Some("lambda_min"));

        let config = SimulationConfig {
            cells_per_wavelength: 0.0,
            ..SimulationConfig::new()
        };
        let err = FieldSolver::from_config(&config).unwrap_err();
        assert_eq!(err.param(), Some("cells_per_wavelength"));

        let err = FieldSolver::from_config(&SimulationConfig::new().with_max_iterations(0))
            .unwrap_err();
        assert_eq!(err.param(), Some("max_iterations"));
    }

    #[test]
    fn test_sinusoid_without_frequency_follows_lambda_min() {
        let json = r#"{ "source": { "position": 87, "waveform": { "type": "sinusoid" } } }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        let mut solver = FieldSolver::from_config(&config).unwrap();

        // 20 cells per wavelength at cfl 0.5 gives 40 steps per period
        solver.advance(11);
        assert_relative_eq!(solver.snapshot().ex[87], 1.0, epsilon = 1e-9);
        assert_eq!(
            solver.source().params().waveform,
            Waveform::sinusoid_for_wavelength(450e-9)
        );
    }

    #[test]
    fn test_smaller_cfl_shortens_time_step() {
        let config = SimulationConfig::new().with_cfl_factor(0.25);
        let mut solver = FieldSolver::from_config(&config).unwrap();

        assert_eq!(solver.time_step(), config.time_step());
        assert_relative_eq!(
            solver.time_step(),
            SimulationConfig::new().time_step() / 2.0,
            max_relative = 1e-12
        );
        assert!(solver.profile().cb().iter().all(|&cb| cb <= 0.25));

        for _ in 0..2_000 {
            assert!(solver.step().is_finite());
        }
    }

    #[test]
    fn test_annotation() {
        let mut solver = FieldSolver::from_config(&SimulationConfig::new()).unwrap();
        solver.advance(3);
        assert_eq!(solver.annotation(), "Iteration step = 3, Eps = 4, Sigma = 0.04");
    }
}
