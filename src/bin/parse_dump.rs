//! Decode a JY901 binary dump into a tab-separated table.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jy901::{filter, read_records_with_stats, write_records};
use log::info;

/// JY901 9-axis IMU dump decoder
#[derive(Parser, Debug)]
#[command(name = "parse_dump")]
#[command(about = "Decode a JY901 binary dump into a tab-separated table")]
#[command(version)]
struct Args {
    /// Input binary dump
    input: PathBuf,

    /// Output text file
    output: PathBuf,

    /// Blank acceleration axes below this value (g), per axis
    #[arg(long)]
    accel_floor: Option<f64>,

    /// Blank the whole acceleration vector when its magnitude is below
    /// this value (g)
    #[arg(long)]
    accel_mag_floor: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!("read {} bytes from {}", data.len(), args.input.display());

    let (mut records, stats) = read_records_with_stats(&data);
    info!(
        "decoded {} records ({} frames ok, {} checksum failures, {} empty cycles)",
        records.len(),
        stats.frames_decoded,
        stats.checksum_failures,
        stats.cycles_discarded
    );

    if let Some(floor) = args.accel_floor {
        for record in &mut records {
            filter::threshold_axes(&mut record.acceleration, floor);
        }
    }
    if let Some(floor) = args.accel_mag_floor {
        // the magnitude filter compares against the squared magnitude
        let min = floor * floor;
        for record in &mut records {
            filter::threshold_magnitude(&mut record.acceleration, min);
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_records(&mut out, &records)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {} records to {}", records.len(), args.output.display());

    Ok(())
}
