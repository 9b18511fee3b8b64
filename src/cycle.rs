//! One synchronization cycle: marker to (at most) one record
//!
//! A cycle starts once the driver has consumed a top-level marker byte.
//! The device sends up to three frames per cycle in a fixed order —
//! acceleration (0x51), angular velocity (0x52), angle (0x53) — each led
//! by its own marker except the first, whose marker is the one that
//! opened the cycle. A frame may be absent or corrupted; its slot in the
//! record is then the invalid sample and the cycle moves on.

use log::debug;

use crate::attribute::{AttributeKind, FRAME_MARKER};
use crate::frame::RawFrame;
use crate::sample::{AttributeSample, MotionRecord};
use crate::scanner::FrameScanner;
use crate::stream::DecodeStats;

/// Result of driving one cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// At least one sample decoded valid
    Emitted(MotionRecord),
    /// All three samples were missing or corrupt; nothing to keep
    Discarded,
    /// Source ended inside a frame body; stop the whole read
    Exhausted,
}

enum FrameRead {
    Frame([u8; RawFrame::SIZE]),
    /// Expected marker/subtype pair not found; cursor rewound
    Mismatch,
    /// Source ended while accumulating a matched frame's body
    Exhausted,
}

/// Drives cycles and owns the timestep counter.
#[derive(Debug, Default)]
pub struct CycleAssembler {
    next_timestep: u32,
}

impl CycleAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one cycle. The opening marker must already have been consumed
    /// from the scanner.
    ///
    /// The timestep counter advances only when a record is emitted, so
    /// emitted timesteps are consecutive from 0 with no gaps.
    pub fn run(&mut self, scanner: &mut FrameScanner, stats: &mut DecodeStats) -> CycleOutcome {
        let mut samples = [AttributeSample::invalid(); 3];

        for (slot, (i, kind)) in samples
            .iter_mut()
            .zip(AttributeKind::CYCLE_ORDER.into_iter().enumerate())
        {
            // The first frame rides on the cycle's opening marker.
            match read_frame(scanner, kind, i > 0) {
                FrameRead::Frame(buf) => {
                    let sample = RawFrame::from_bytes(&buf).decode(kind);
                    if sample.valid {
                        stats.frames_decoded += 1;
                    } else {
                        stats.checksum_failures += 1;
                        debug!("checksum mismatch on {kind:?} frame");
                    }
                    *slot = sample;
                }
                FrameRead::Mismatch => {
                    debug!("expected {kind:?} frame not found, resynchronizing");
                }
                FrameRead::Exhausted => return CycleOutcome::Exhausted,
            }
        }

        let [acceleration, angular_velocity, angle] = samples;
        if !(acceleration.valid || angular_velocity.valid || angle.valid) {
            return CycleOutcome::Discarded;
        }

        let record = MotionRecord {
            timestep: self.next_timestep,
            acceleration,
            angular_velocity,
            angle,
        };
        self.next_timestep += 1;
        CycleOutcome::Emitted(record)
    }
}

/// Try to pull one complete frame of the expected kind off the scanner.
///
/// On a marker or subtype mismatch (end of source included) the cursor is
/// rewound to where the expectation began, so the rejected bytes stay
/// candidates for later marker detection. End of source after the
/// marker/subtype matched is terminal: the partial frame is dropped and
/// the cursor stays at the end.
fn read_frame(scanner: &mut FrameScanner, kind: AttributeKind, lead_marker: bool) -> FrameRead {
    let start = scanner.position();

    if lead_marker {
        match scanner.next_byte() {
            Some(FRAME_MARKER) => {}
            _ => {
                scanner.rewind_to(start);
                return FrameRead::Mismatch;
            }
        }
    }
    match scanner.next_byte() {
        Some(byte) if byte == kind.subtype() => {}
        _ => {
            scanner.rewind_to(start);
            return FrameRead::Mismatch;
        }
    }

    let mut buf = [0u8; RawFrame::SIZE];
    buf[0] = FRAME_MARKER;
    buf[1] = kind.subtype();
    if !scanner.read_into(&mut buf[2..]) {
        return FrameRead::Exhausted;
    }
    FrameRead::Frame(buf)
}
