mod config;
mod io;

pub use config::ConfigError;
pub use io::IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(IoError::FileNotFound { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
