use thiserror;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input handed to `update` is not a byte sequence.
    #[error("update input is not a byte sequence")]
    InvalidInput,

    #[error("unsupported digest length: {0} bits")]
    UnsupportedVariant(usize),

    #[error("output buffer is {actual} bytes, digest is {expected} bytes")]
    OutputLength { expected: usize, actual: usize },

    #[error("null hash handle")]
    NullHandle,
}

impl Error {
    /// Status code reported through the C API. Success is 0.
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidInput => -1,
            Error::UnsupportedVariant(_) => -2,
            Error::OutputLength { .. } => -3,
            Error::NullHandle => -4,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
