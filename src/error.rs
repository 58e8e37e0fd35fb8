use crate::infrastructure::FileSystemError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    FileNotFound(String),
    FileRead { path: String, message: String },
    Other(String),
    Usage(String),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(formatter, "file \"{}\" not found", path),
            Self::FileRead { path, message } => {
                write!(formatter, "failed to read file \"{}\": {}", path, message)
            }
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Usage(usage) => write!(formatter, "{}", usage),
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<FileSystemError> for ApplicationError {
    fn from(error: FileSystemError) -> Self {
        let path = error.path().display().to_string();

        match error.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound(path),
            _ => Self::FileRead {
                path,
                message: error.to_string(),
            },
        }
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}
