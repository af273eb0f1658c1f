use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use crc32fast::Hasher;
use tracing::trace;

const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the IEEE CRC-32 of everything in `stream`, starting from the
/// beginning regardless of the current position. The stream is left at EOF.
pub fn compute_crc32<S: Read + Seek + ?Sized>(stream: &mut S) -> io::Result<u32> {
    stream.seek(SeekFrom::Start(0))?;

    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let bytes_read = match stream.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
        total += bytes_read as u64;
    }

    let crc = hasher.finalize();
    trace!("crc32 over {total} bytes = {crc:08x}");
    Ok(crc)
}

pub fn crc32_of(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}
