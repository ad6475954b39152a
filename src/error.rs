use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A filtering mode outside the known set.
    #[error("invalid option: {value}")]
    InvalidArgument { value: String },

    #[error("invalid release date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("failed to read config file at '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {message}")]
    ConfigParse { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
