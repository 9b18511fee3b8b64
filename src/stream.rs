//! Driver loop: decode an entire byte source into records

use crate::cycle::{CycleAssembler, CycleOutcome};
use crate::sample::MotionRecord;
use crate::scanner::FrameScanner;

/// Counters accumulated over one decode pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    /// Bytes consumed from the source, including skipped noise
    pub bytes_scanned: usize,
    /// Frames whose checksum verified
    pub frames_decoded: usize,
    /// Frames rejected by the checksum
    pub checksum_failures: usize,
    /// Cycles dropped because no frame in them decoded valid
    pub cycles_discarded: usize,
}

/// Decode every record out of a raw dump.
///
/// Scans forward for marker bytes, runs one cycle per marker, and stops
/// when the source is exhausted. Malformed input never fails: corrupt or
/// truncated frames degrade to invalid samples or discarded cycles.
pub fn read_records(data: &[u8]) -> Vec<MotionRecord> {
    read_records_with_stats(data).0
}

/// Like [`read_records`], also returning the decode counters.
pub fn read_records_with_stats(data: &[u8]) -> (Vec<MotionRecord>, DecodeStats) {
    let mut scanner = FrameScanner::new(data);
    let mut assembler = CycleAssembler::new();
    let mut stats = DecodeStats::default();
    let mut records = Vec::new();

    while scanner.seek_marker() {
        match assembler.run(&mut scanner, &mut stats) {
            CycleOutcome::Emitted(record) => records.push(record),
            CycleOutcome::Discarded => stats.cycles_discarded += 1,
            CycleOutcome::Exhausted => break,
        }
    }

    stats.bytes_scanned = scanner.position();
    (records, stats)
}
