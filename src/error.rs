use std::io;

use thiserror::Error;

use crate::patch::PatchError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid CRC '{0}', expected up to 8 hex digits")]
    InvalidCrc(String),

    #[error("Invalid offset '{0}', expected a decimal or 0x-prefixed hex number")]
    InvalidOffset(String),

    #[error("No desired CRC given and CRC_FORCER_CRC not set")]
    MissingCrc,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Error in configuration")]
    Config(#[from] ConfigError),

    #[error("Error forcing CRC")]
    Patch(#[from] PatchError),

    #[error("Error accessing file")]
    Io(#[from] io::Error),
}
