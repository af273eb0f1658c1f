pub mod error;
pub mod poly;

pub use error::FieldError;
pub use poly::{
    bit_reverse32, degree, divide_and_remainder, multiply_mod, pow_mod, reciprocal_mod, GENERATOR,
};
