use std::{error::Error, path::PathBuf};

use clap::{command, value_parser, Arg};
use puzzle_timing::{batch, logging, ChartOptions, InputFormat};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(env!("CARGO_CRATE_NAME"));

    let arguments = command!("plot-all")
        .about("Renders one chart per timing file matching a glob pattern.")
        .arg(
            Arg::new("pattern")
                .help("Glob pattern of the timing files")
                .default_value("timings/*.csv")
                .index(1),
        )
        .arg(
            Arg::new("output_dir")
                .help("Directory the charts are written to")
                .default_value("plots")
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("format")
                .help("Input layout; guessed per file from the extension when omitted")
                .long("format")
                .short('F')
                .value_parser(["csv", "whitespace"]),
        )
        .get_matches();

    let pattern = arguments
        .get_one::<String>("pattern")
        .ok_or("pattern is required")?;
    let output_dir = arguments
        .get_one::<PathBuf>("output_dir")
        .ok_or("output directory is required")?;
    let format = arguments
        .get_one::<String>("format")
        .map(|f| f.parse::<InputFormat>())
        .transpose()?;

    let written = batch::render_matching(pattern, format, &ChartOptions::default(), output_dir)?;
    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}
