use std::io::{Cursor, Read, Seek, SeekFrom, Write};

use tracing::debug;

use crate::checksum::compute_crc32;
use crate::patch::delta::{delta_bytes, derive_delta, PATCH_WIDTH};
use crate::patch::error::PatchError;

/// Rewrite the four bytes at `offset` so the IEEE CRC-32 of the whole
/// stream becomes `desired`. Nothing is written if the CRC already matches.
///
/// The stream must not be touched by anyone else during the call. If an
/// error is returned after the patch was written, the stream contents are
/// undefined and should be re-validated.
pub fn force_crc32<S>(stream: &mut S, offset: u64, desired: u32) -> Result<(), PatchError>
where
    S: Read + Write + Seek + ?Sized,
{
    force_crc32_tracked(stream, offset, desired).map(|_| ())
}

/// Same as [`force_crc32`], returning the CRC the stream had before.
pub fn force_crc32_tracked<S>(stream: &mut S, offset: u64, desired: u32) -> Result<u32, PatchError>
where
    S: Read + Write + Seek + ?Sized,
{
    let length = stream.seek(SeekFrom::End(0))?;
    check_offset(offset, length)?;

    let current = compute_crc32(stream)?;
    if current == desired {
        debug!("crc already {desired:08x}, leaving stream untouched");
        return Ok(current);
    }

    let delta = derive_delta(length - offset, current, desired)?;
    debug!("patching {length} byte stream at {offset}: {current:08x} -> {desired:08x}, delta {delta:08x}");
    apply_delta(stream, offset, delta)?;

    let actual = compute_crc32(stream)?;
    if actual != desired {
        return Err(PatchError::VerificationMismatch {
            expected: desired,
            actual,
        });
    }

    debug!("verified crc {actual:08x}");
    Ok(current)
}

/// The sacrificial window `[offset, offset + 4)` must lie inside the stream.
pub fn check_offset(offset: u64, length: u64) -> Result<(), PatchError> {
    match offset.checked_add(PATCH_WIDTH) {
        Some(end) if end <= length => Ok(()),
        _ => Err(PatchError::InvalidOffset { offset, length }),
    }
}

/// In-memory variant of [`force_crc32`]. The buffer length never changes.
pub fn force_crc32_slice(bytes: &mut [u8], offset: u64, desired: u32) -> Result<(), PatchError> {
    force_crc32(&mut Cursor::new(bytes), offset, desired)
}

fn apply_delta<S>(stream: &mut S, offset: u64, delta: u32) -> Result<(), PatchError>
where
    S: Read + Write + Seek + ?Sized,
{
    let mut buffer = [0u8; PATCH_WIDTH as usize];

    stream.seek(SeekFrom::Start(offset))?;
    // A single transfer each way; a short count is an error, never retried.
    if stream.read(&mut buffer)? != buffer.len() {
        return Err(PatchError::ShortRead);
    }

    for (byte, d) in buffer.iter_mut().zip(delta_bytes(delta)) {
        *byte ^= d;
    }

    stream.seek(SeekFrom::Start(offset))?;
    if stream.write(&buffer)? != buffer.len() {
        return Err(PatchError::ShortWrite);
    }
    stream.flush()?;

    Ok(())
}
