use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to gather entropy: {0}")]
    Entropy(#[from] rand::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
