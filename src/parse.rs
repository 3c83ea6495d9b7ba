use std::{fs, path::Path, str::FromStr};

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sample::{SampleLabel, TimingSample};

/// Layout of a timing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `label,elapsed` records below a single header line.
    HeaderedCsv,
    /// `size elapsed` per line, any whitespace between the tokens, no header.
    Whitespace,
}

impl InputFormat {
    /// `.csv` files are read as headered CSV, everything else as whitespace
    /// separated columns.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::HeaderedCsv,
            _ => InputFormat::Whitespace,
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::HeaderedCsv),
            "whitespace" | "ws" | "txt" => Ok(InputFormat::Whitespace),
            other => Err(Error::Config(format!("{} is not a valid input format", other))),
        }
    }
}

pub fn load_samples(path: impl AsRef<Path>, format: InputFormat) -> Result<Vec<TimingSample>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    let samples = parse_samples(&input, format)?;
    debug!(path = %path.display(), count = samples.len(), "loaded samples");
    Ok(samples)
}

/// Parses timing samples in file order. Blank lines are skipped; any other line
/// that is not exactly two tokens with a numeric time aborts the whole parse.
pub fn parse_samples(input: &str, format: InputFormat) -> Result<Vec<TimingSample>> {
    match format {
        InputFormat::HeaderedCsv => parse_csv(input),
        InputFormat::Whitespace => parse_whitespace(input),
    }
}

fn parse_csv(input: &str) -> Result<Vec<TimingSample>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut samples = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != 2 {
            return Err(Error::parse(
                line,
                format!("expected 2 fields, found {}", record.len()),
            ));
        }
        let elapsed = parse_elapsed(&record[1], line)?;
        samples.push(TimingSample::new(&record[0], elapsed));
    }
    Ok(samples)
}

fn parse_whitespace(input: &str) -> Result<Vec<TimingSample>> {
    let mut samples = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx as u64 + 1;
        let tokens = line.split_whitespace().collect::<Vec<&str>>();
        match tokens.as_slice() {
            [] => continue,
            [size, time] => {
                let size = size.parse::<i64>().map_err(|_| {
                    Error::parse(line_no, format!("invalid puzzle size `{}`", size))
                })?;
                let elapsed = parse_elapsed(time, line_no)?;
                samples.push(TimingSample::new(SampleLabel::Size(size), elapsed));
            }
            other => {
                return Err(Error::parse(
                    line_no,
                    format!("expected 2 tokens, found {}", other.len()),
                ))
            }
        }
    }
    Ok(samples)
}

fn parse_elapsed(token: &str, line: u64) -> Result<f64> {
    token
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid elapsed time `{}`", token)))
}
