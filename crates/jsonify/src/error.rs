use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("conversion for `{type_name}` failed: {message}")]
    Conversion { type_name: String, message: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, Error>;
