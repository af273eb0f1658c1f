use std::io;

use thiserror::Error;

use crate::field::FieldError;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("invalid byte offset {offset} for a stream of {length} bytes")]
    InvalidOffset { offset: u64, length: u64 },

    #[error("field arithmetic failed")]
    Field(#[from] FieldError),

    #[error("short read of sacrificial bytes")]
    ShortRead,

    #[error("short write of sacrificial bytes")]
    ShortWrite,

    #[error("new CRC {actual:08x} does not match desired CRC {expected:08x}")]
    VerificationMismatch { expected: u32, actual: u32 },

    #[error("I/O error")]
    Io(#[from] io::Error),
}
