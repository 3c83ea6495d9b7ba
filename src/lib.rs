//! Reads puzzle solve-time measurements and renders them as line charts.
//!
//! ```no_run
//! use puzzle_timing::{load_samples, render_chart, ChartOptions, InputFormat};
//!
//! let samples = load_samples("timing_results.txt", InputFormat::HeaderedCsv)?;
//! render_chart(&samples, &ChartOptions::sat_timing())?;
//! # Ok::<(), puzzle_timing::Error>(())
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod logging;
pub mod options;
pub mod parse;
pub mod presets;
pub mod render;
pub mod sample;

pub use error::{Error, Result};
pub use options::{ChartOptions, LineColor, MarkerStyle};
pub use parse::{load_samples, parse_samples, InputFormat};
pub use presets::Preset;
pub use render::{render_chart, render_to_bytes};
pub use sample::{SampleLabel, TimingSample};
