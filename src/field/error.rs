use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("polynomial division by zero")]
    DivisionByZero,

    #[error("polynomial {0:#x} has no reciprocal modulo the CRC-32 generator")]
    NoReciprocal(u64),
}
