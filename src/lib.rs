//! JY901 9-axis IMU binary dump parsing
//!
//! This crate provides frame synchronization, decoding and export for
//! binary dumps captured from a JY901-family inertial measurement unit.
//! The device emits 11-byte frames led by a `0x55` marker byte; each
//! synchronization cycle carries up to three frames (acceleration,
//! angular velocity, orientation angle) that are merged into one
//! timestamped record.

mod attribute;
mod checksum;
mod cycle;
mod export;
pub mod filter;
mod frame;
mod sample;
mod scanner;
mod stream;
mod temperature;

pub use attribute::{subtype, AttributeKind, AXIS_DIVISOR, FRAME_MARKER};
pub use checksum::{compute_checksum, verify_checksum_bytes};
pub use cycle::{CycleAssembler, CycleOutcome};
pub use export::write_records;
pub use frame::{FrameError, RawFrame};
pub use sample::{AttributeSample, MotionRecord};
pub use scanner::FrameScanner;
pub use stream::{read_records, read_records_with_stats, DecodeStats};
pub use temperature::decode_celsius;
