pub mod delta;
pub mod engine;
pub mod error;

pub use delta::{delta_bytes, derive_delta, PATCH_WIDTH};
pub use engine::{check_offset, force_crc32, force_crc32_slice, force_crc32_tracked};
pub use error::PatchError;
