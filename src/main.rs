use std::{error::Error, fs::File};

use puzzle_timing::{cli, load_samples, logging, render_chart};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(env!("CARGO_CRATE_NAME"));
    let arguments = cli::cli()?;
    let profiling = arguments.flamegraph.is_some();

    let format = arguments.input_format();
    let options = arguments.chart_options()?;

    if profiling {
        flame::start("load_samples");
    }
    let samples = load_samples(&arguments.input, format)?;
    if profiling {
        flame::end("load_samples");
        flame::start("render_chart");
    }
    let written = render_chart(&samples, &options)?;
    if profiling {
        flame::end("render_chart");
    }
    info!("Chart saved to {}", written.display());

    if let Some(path) = &arguments.flamegraph {
        flame::dump_html(File::create(path)?)?;
    }

    Ok(())
}
