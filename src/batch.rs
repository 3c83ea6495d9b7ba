use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::glob;
use tracing::info;

use crate::error::{Error, Result};
use crate::options::ChartOptions;
use crate::parse::{load_samples, InputFormat};
use crate::render::render_chart;

/// Renders one chart per file matching `pattern` into
/// `<output_dir>/<stem>_plot.png`, titled after the file stem.
///
/// `format` of `None` picks the format from each file's extension. The first
/// failing file stops the run.
pub fn render_matching(
    pattern: &str,
    format: Option<InputFormat>,
    template: &ChartOptions,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|err| Error::io(output_dir, err))?;

    let mut written = Vec::new();
    for entry in glob(pattern)? {
        let path = entry.map_err(|err| {
            let path = err.path().to_path_buf();
            Error::io(path, err.into_error())
        })?;
        if !path.is_file() {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::Config(format!("{} has no usable file name", path.display())))?;

        let format = format.unwrap_or_else(|| InputFormat::from_path(&path));
        let samples = load_samples(&path, format)?;

        let options = ChartOptions {
            title: stem.to_string(),
            output_path: output_dir.join(format!("{}_plot.png", stem)),
            ..template.clone()
        };
        written.push(render_chart(&samples, &options)?);
    }

    info!(pattern, charts = written.len(), "batch finished");
    Ok(written)
}
