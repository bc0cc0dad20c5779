use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    InvalidThreshold(String),
    UnknownAlgorithm(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidThreshold(msg) => write!(f, "Invalid threshold: {}", msg),
            Error::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{}' (expected apriori, eclat or fp-growth)", name)
            }
            Error::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
