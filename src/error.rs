use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no samples to plot")]
    EmptySeries,

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: u64, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
