use std::error::Error;

use puzzle_timing::{logging, Preset};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(env!("CARGO_CRATE_NAME"));
    let written = Preset::SatTiming.run()?;
    info!("Timing graph written to {}", written.display());
    Ok(())
}
