//! The three fixed chart jobs: each one knows where its measurements come from
//! and how its chart looks.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::options::ChartOptions;
use crate::parse::{load_samples, InputFormat};
use crate::render::render_chart;
use crate::sample::{SampleLabel, TimingSample};

/// IDA* solve times in seconds for puzzle sizes 2 through 8.
const IDA_STAR_TIMES: [(i64, f64); 7] = [
    (2, 0.0000),
    (3, 0.0000),
    (4, 0.0020),
    (5, 132.6880),
    (6, 14320.00),
    (7, 1032000.00),
    (8, 378691200.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// `timing_results.txt`, written by the SAT solvability checker.
    SatTiming,
    /// `execution_times.txt`, written by the non-deterministic solver.
    TaquinTimes,
    /// Built-in IDA* measurements.
    IdaStar,
}

impl Preset {
    pub fn options(self) -> ChartOptions {
        match self {
            Preset::SatTiming => ChartOptions::sat_timing(),
            Preset::TaquinTimes => ChartOptions::taquin_times(),
            Preset::IdaStar => ChartOptions::ida_star(),
        }
    }

    pub fn input(self) -> Option<(PathBuf, InputFormat)> {
        match self {
            Preset::SatTiming => Some((PathBuf::from("timing_results.txt"), InputFormat::HeaderedCsv)),
            Preset::TaquinTimes => Some((PathBuf::from("execution_times.txt"), InputFormat::Whitespace)),
            Preset::IdaStar => None,
        }
    }

    /// Reads the preset's samples with its input file resolved against `dir`.
    pub fn samples_in(self, dir: &Path) -> Result<Vec<TimingSample>> {
        match self.input() {
            Some((path, format)) => load_samples(dir.join(path), format),
            None => Ok(ida_star_samples()),
        }
    }

    /// Loads the preset's samples and writes its chart, both relative to `dir`.
    pub fn run_in(self, dir: &Path) -> Result<PathBuf> {
        let samples = self.samples_in(dir)?;
        let mut options = self.options();
        options.output_path = dir.join(&options.output_path);
        render_chart(&samples, &options)
    }

    /// Same as [`Preset::run_in`] on the working directory.
    pub fn run(self) -> Result<PathBuf> {
        self.run_in(Path::new(""))
    }
}

pub fn ida_star_samples() -> Vec<TimingSample> {
    IDA_STAR_TIMES
        .iter()
        .map(|&(size, time)| TimingSample::new(SampleLabel::Size(size), time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ida_star_data_is_in_size_order() {
        let samples = ida_star_samples();
        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0], TimingSample::new(SampleLabel::Size(2), 0.0));
        assert_eq!(samples[6], TimingSample::new(SampleLabel::Size(8), 378691200.0));
    }

    #[test]
    fn presets_read_the_expected_files() {
        assert_eq!(
            Preset::SatTiming.input(),
            Some((PathBuf::from("timing_results.txt"), InputFormat::HeaderedCsv))
        );
        assert_eq!(
            Preset::TaquinTimes.input(),
            Some((PathBuf::from("execution_times.txt"), InputFormat::Whitespace))
        );
        assert_eq!(Preset::IdaStar.input(), None);
        assert!(Preset::IdaStar.options().log_scale_y);
    }
}
