use std::fmt;

/// The independent variable of a measurement: a puzzle dimension as written in
/// the input file, or an integer puzzle size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleLabel {
    Name(String),
    Size(i64),
}

impl fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleLabel::Name(name) => f.write_str(name),
            SampleLabel::Size(size) => write!(f, "{}", size),
        }
    }
}

impl From<&str> for SampleLabel {
    fn from(name: &str) -> Self {
        SampleLabel::Name(name.to_string())
    }
}

impl From<i64> for SampleLabel {
    fn from(size: i64) -> Self {
        SampleLabel::Size(size)
    }
}

/// One (label, elapsed time) measurement. The unit of `elapsed` depends on the
/// producer of the file (milliseconds for the SAT timings, seconds otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSample {
    pub label: SampleLabel,
    pub elapsed: f64,
}

impl TimingSample {
    pub fn new(label: impl Into<SampleLabel>, elapsed: f64) -> Self {
        TimingSample {
            label: label.into(),
            elapsed,
        }
    }
}
