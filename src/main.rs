use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crc_forcer::{
    config::{parse_crc, parse_offset, ForceConfig},
    run::run,
};

#[derive(Parser)]
#[command(name = "crc-forcer")]
#[command(about = "Force the CRC-32 of a file by rewriting four bytes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// File to patch in place
    path: PathBuf,

    /// Offset of the four sacrificial bytes (decimal or 0x-prefixed hex)
    #[arg(short, long, value_parser = parse_offset)]
    offset: u64,

    /// Desired CRC-32 in hex; falls back to CRC_FORCER_CRC
    #[arg(short, long, value_parser = parse_crc)]
    crc: Option<u32>,

    /// Count the offset back from the end of the file
    #[arg(long)]
    from_end: bool,

    /// Patch a temporary copy and leave the file untouched
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("crc_forcer={filter_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ForceConfig::new(
        args.path,
        args.offset,
        args.crc,
        args.from_end,
        args.dry_run,
    )
    .context("invalid arguments")?;

    let report = run(&config)
        .with_context(|| format!("failed to force crc of {}", config.path.display()))?;

    let verb = match (report.changed(), config.dry_run) {
        (false, _) => "unchanged",
        (true, true) => "would patch",
        (true, false) => "patched",
    };
    println!(
        "{}: {verb} {:#x}: {} -> {} (crc {:08x} -> {:08x})",
        config.path.display(),
        report.offset,
        hex::encode(report.previous_bytes),
        hex::encode(report.patched_bytes),
        report.previous_crc,
        report.final_crc,
    );

    Ok(())
}
