use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("payload is not valid encoded data: {0}")]
    Decode(#[from] data_encoding::DecodeError),

    #[error("begin tag {0:?} not found")]
    BeginTagNotFound(String),

    #[error("end tag {0:?} not found after begin tag")]
    EndTagNotFound(String),

    #[error("secure random source failed")]
    EntropySource,
}
