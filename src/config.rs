use std::path::PathBuf;

use crate::error::ConfigError;
use crate::patch::{PatchError, PATCH_WIDTH};

pub const CRC_ENV_VAR: &str = "CRC_FORCER_CRC";

/// Where the configured offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetOrigin {
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct ForceConfig {
    pub path: PathBuf,
    pub offset: u64,
    pub origin: OffsetOrigin,
    pub desired_crc: u32,
    pub dry_run: bool,
}

impl ForceConfig {
    pub fn new(
        path: PathBuf,
        offset: u64,
        crc: Option<u32>,
        from_end: bool,
        dry_run: bool,
    ) -> Result<Self, ConfigError> {
        let desired_crc = match crc {
            Some(crc) => crc,
            None => Self::crc_from_env()?,
        };

        Ok(Self {
            path,
            offset,
            origin: if from_end {
                OffsetOrigin::End
            } else {
                OffsetOrigin::Start
            },
            desired_crc,
            dry_run,
        })
    }

    fn crc_from_env() -> Result<u32, ConfigError> {
        let crc = std::env::var(CRC_ENV_VAR).map_err(|_| ConfigError::MissingCrc)?;
        parse_crc(&crc)
    }

    /// Absolute offset of the sacrificial bytes in a stream of `length` bytes.
    pub fn resolve_offset(&self, length: u64) -> Result<u64, PatchError> {
        match self.origin {
            OffsetOrigin::Start => Ok(self.offset),
            OffsetOrigin::End if self.offset >= PATCH_WIDTH && self.offset <= length => {
                Ok(length - self.offset)
            }
            OffsetOrigin::End => Err(PatchError::InvalidOffset {
                offset: self.offset,
                length,
            }),
        }
    }
}

pub fn parse_crc(input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 8 {
        return Err(ConfigError::InvalidCrc(input.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidCrc(input.to_string()))
}

pub fn parse_offset(input: &str) -> Result<u64, ConfigError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };

    parsed.map_err(|_| ConfigError::InvalidOffset(input.to_string()))
}
