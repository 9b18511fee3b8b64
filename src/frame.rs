//! Raw frame layout and decoding
//!
//! Every JY901 frame is exactly 11 bytes: marker, subtype, four
//! little-endian signed 16-bit payload words (X, Y, Z, temperature) and a
//! trailing modulo-256 checksum.

use bytemuck::{bytes_of, bytes_of_mut, Pod, Zeroable};

use crate::attribute::{AttributeKind, AXIS_DIVISOR, FRAME_MARKER};
use crate::checksum::{compute_checksum, verify_checksum_bytes};
use crate::sample::AttributeSample;
use crate::temperature::decode_celsius;

/// Error produced when reinterpreting a byte slice as a frame.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

/// One frame as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct RawFrame {
    /// Marker constant, `0x55` on a well-formed frame
    pub marker: u8,
    /// Subtype byte identifying the attribute kind
    pub subtype: u8,
    /// X axis, little-endian signed 16-bit
    pub x: [u8; 2],
    /// Y axis, little-endian signed 16-bit
    pub y: [u8; 2],
    /// Z axis, little-endian signed 16-bit
    pub z: [u8; 2],
    /// Raw temperature, little-endian signed 16-bit
    pub temperature: [u8; 2],
    /// Modulo-256 sum of the ten preceding bytes
    pub checksum: u8,
}

impl RawFrame {
    /// Frame size in bytes
    pub const SIZE: usize = 11;

    /// Reinterpret an exactly-sized buffer as a frame.
    pub fn from_bytes(bytes: &[u8; RawFrame::SIZE]) -> &Self {
        bytemuck::from_bytes(bytes)
    }

    /// Reinterpret an arbitrary slice as a frame, checking the length.
    pub fn parse(bytes: &[u8]) -> Result<&Self, FrameError> {
        bytemuck::try_from_bytes(bytes).map_err(|_| FrameError::Length {
            expected: Self::SIZE,
            actual: bytes.len(),
        })
    }

    /// Verify the trailing checksum byte against the first ten bytes.
    pub fn checksum_ok(&self) -> bool {
        verify_checksum_bytes(bytes_of(self))
    }

    /// Compute and store the correct checksum byte.
    ///
    /// After calling this, `checksum_ok()` returns true.
    pub fn update_checksum(&mut self) {
        let bytes = bytes_of_mut(self);
        let len = bytes.len();
        bytes[len - 1] = compute_checksum(&bytes[..len - 1]);
    }

    /// Decode this frame into a unit-scaled sample.
    ///
    /// A frame that fails its checksum decodes to the invalid sample; the
    /// payload is never interpreted. Pure: identical bytes always yield an
    /// identical sample.
    pub fn decode(&self, kind: AttributeKind) -> AttributeSample {
        if !self.checksum_ok() {
            return AttributeSample::invalid();
        }

        let scale = kind.full_scale();
        AttributeSample {
            x: i16::from_le_bytes(self.x) as f64 / AXIS_DIVISOR * scale,
            y: i16::from_le_bytes(self.y) as f64 / AXIS_DIVISOR * scale,
            z: i16::from_le_bytes(self.z) as f64 / AXIS_DIVISOR * scale,
            temperature: decode_celsius(i16::from_le_bytes(self.temperature)),
            valid: true,
        }
    }
}

impl<'a> TryFrom<&'a [u8]> for &'a RawFrame {
    type Error = FrameError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, FrameError> {
        RawFrame::parse(bytes)
    }
}
