use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};

use tracing::info;

use crate::config::ForceConfig;
use crate::error::CliError;
use crate::patch::{check_offset, force_crc32_tracked, PATCH_WIDTH};

/// What a forcing run did to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceReport {
    pub offset: u64,
    pub length: u64,
    pub previous_crc: u32,
    pub final_crc: u32,
    pub previous_bytes: [u8; 4],
    pub patched_bytes: [u8; 4],
}

impl ForceReport {
    pub fn changed(&self) -> bool {
        self.previous_bytes != self.patched_bytes
    }
}

/// Force the CRC of the configured file, or of a temporary copy when
/// `dry_run` is set.
pub fn run(config: &ForceConfig) -> Result<ForceReport, CliError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(!config.dry_run)
        .open(&config.path)?;

    if config.dry_run {
        let mut scratch = tempfile::tempfile()?;
        io::copy(&mut file, &mut scratch)?;
        info!("dry run on a temporary copy of {}", config.path.display());
        return force_stream(&mut scratch, config);
    }

    force_stream(&mut file, config)
}

pub fn force_stream<S>(stream: &mut S, config: &ForceConfig) -> Result<ForceReport, CliError>
where
    S: Read + Write + Seek + ?Sized,
{
    let length = stream.seek(SeekFrom::End(0))?;
    let offset = config.resolve_offset(length)?;

    check_offset(offset, length)?;

    let previous_bytes = read_window(stream, offset)?;
    let previous_crc = force_crc32_tracked(stream, offset, config.desired_crc)?;
    let patched_bytes = read_window(stream, offset)?;
    // Verified by force_crc32_tracked.
    let final_crc = config.desired_crc;
    info!(
        "forced crc {previous_crc:08x} -> {final_crc:08x} at offset {offset} of {}",
        config.path.display()
    );

    Ok(ForceReport {
        offset,
        length,
        previous_crc,
        final_crc,
        previous_bytes,
        patched_bytes,
    })
}

fn read_window<S>(stream: &mut S, offset: u64) -> io::Result<[u8; PATCH_WIDTH as usize]>
where
    S: Read + Seek + ?Sized,
{
    let mut window = [0u8; PATCH_WIDTH as usize];
    stream.seek(SeekFrom::Start(offset))?;
    stream.read_exact(&mut window)?;
    Ok(window)
}
