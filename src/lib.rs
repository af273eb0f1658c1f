pub mod checksum;
pub mod config;
pub mod error;
pub mod field;
pub mod patch;
pub mod run;

pub use checksum::{compute_crc32, crc32_of};
pub use error::CliError;
pub use patch::{force_crc32, force_crc32_slice, PatchError};
