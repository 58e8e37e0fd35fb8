use async_trait::async_trait;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::{Path, PathBuf},
};
use tokio::{fs::File, io::AsyncReadExt};

#[async_trait]
pub trait FileSystem: Debug {
    async fn read_file_to_string(&self, path: &Path) -> Result<String, FileSystemError>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem {}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn read_file_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        let mut buffer = String::new();

        File::open(path)
            .await
            .map_err(|error| FileSystemError::new(error, path))?
            .read_to_string(&mut buffer)
            .await
            .map_err(|error| FileSystemError::new(error, path))?;

        Ok(buffer)
    }
}

#[derive(Debug)]
pub struct FileSystemError {
    error: io::Error,
    path: PathBuf,
}

impl FileSystemError {
    pub fn new(error: io::Error, path: &Path) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.error.kind()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Error for FileSystemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl Display for FileSystemError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", &self.error, self.path.display())
    }
}
