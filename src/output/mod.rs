//! Frame output for the CLI frontend.
//!
//! Streams field snapshots to stdout for an external plotter. Two formats:
//!
//! - `raw`: per frame, `width` little-endian f32 values of `Ex` followed by
//!   `width - 1` values of `Hy`. No header; the layout is fixed by the grid.
//! - `json`: one header line describing the run, then one
//!   `{"step":..,"ex":[..],"hy":[..]}` line per frame.

use std::io::{self, Write};

use log::info;
use serde::Serialize;

use crate::components::SourceParams;
use crate::error::{FdtdError, Result};
use crate::solver::{FieldSnapshot, FieldSolver};

/// Output encoding for frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FrameFormat {
    /// Little-endian f32 samples
    #[default]
    Raw,
    /// JSON lines
    Json,
}

/// Run description written ahead of JSON frames.
#[derive(Debug, Serialize)]
struct RunHeader<'a> {
    width: usize,
    cell_size: f64,
    time_step: f64,
    cfl_factor: f64,
    epsilon2: f64,
    sigma: f64,
    dielectric_start: usize,
    source: &'a SourceParams,
    relative_permittivity: &'a [f64],
}

/// Frame encoder over any byte sink.
pub struct FrameWriter<W: Write> {
    sink: W,
    format: FrameFormat,
    buffer: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    /// Create a frame writer.
    pub fn new(sink: W, format: FrameFormat) -> Self {
        Self {
            sink,
            format,
            buffer: Vec::new(),
        }
    }

    /// Write the run header (JSON only; raw streams carry no header).
    pub fn write_header(&mut self, solver: &FieldSolver) -> Result<()> {
        if self.format != FrameFormat::Json {
            return Ok(());
        }

        let permittivity = solver.profile().relative_permittivity();
        let header = RunHeader {
            width: solver.grid().width,
            cell_size: solver.grid().cell_size,
            time_step: solver.time_step(),
            cfl_factor: solver.cfl_factor(),
            epsilon2: solver.material().epsilon2,
            sigma: solver.material().sigma,
            dielectric_start: solver.material().dielectric_start,
            source: solver.source().params(),
            relative_permittivity: &permittivity,
        };
        self.write_json_line(&header)
    }

    /// Write one frame.
    pub fn write_frame(&mut self, snapshot: &FieldSnapshot<'_>) -> Result<()> {
        match self.format {
            FrameFormat::Raw => {
                self.buffer.clear();
                for &value in snapshot.ex.iter().chain(snapshot.hy) {
                    self.buffer.extend_from_slice(&(value as f32).to_le_bytes());
                }
                self.sink
                    .write_all(&self.buffer)
                    .map_err(|e| FdtdError::frame_output(e.to_string()))
            }
            FrameFormat::Json => self.write_json_line(snapshot),
        }
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink
            .flush()
            .map_err(|e| FdtdError::frame_output(e.to_string()))
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_json_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        self.buffer.clear();
        serde_json::to_writer(&mut self.buffer, value)
            .map_err(|e| FdtdError::frame_output(e.to_string()))?;
        self.buffer.push(b'\n');
        self.sink
            .write_all(&self.buffer)
            .map_err(|e| FdtdError::frame_output(e.to_string()))
    }
}

/// Run `iterations` steps, writing every `every`-th frame to `sink`.
///
/// The final frame is always written. Returns the number of frames written.
pub fn stream_frames<W: Write>(
    solver: &mut FieldSolver,
    iterations: u64,
    every: u64,
    writer: &mut FrameWriter<W>,
) -> Result<u64> {
    let every = every.max(1);
    let mut frames = 0;

    writer.write_header(solver)?;

    for _ in 0..iterations {
        let snapshot = solver.step();
        if snapshot.step % every == 0 || snapshot.step == iterations {
            writer.write_frame(&snapshot)?;
            frames += 1;
        }
    }

    writer.flush()?;
    Ok(frames)
}

/// Run the solver and stream frames to stdout.
pub fn process_frames(
    solver: &mut FieldSolver,
    iterations: u64,
    every: u64,
    format: FrameFormat,
) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = FrameWriter::new(stdout.lock(), format);

    let frames = stream_frames(solver, iterations, every, &mut writer)?;
    let last = solver.snapshot();
    info!(
        "Wrote {} frames over {} steps ({:.3e} s simulated), peak |Ex| = {:.4}",
        frames,
        last.step,
        solver.elapsed_time(),
        last.peak_ex()
    );

    Ok(())
}
