//! Post-decode sample filters
//!
//! Elementwise threshold filters applied to already-decoded samples.
//! Blanked axes use the same NaN sentinel as invalid samples, so filtered
//! output renders identically to missing data.

use crate::sample::AttributeSample;

/// Blank each axis that is strictly below `min`, independently.
pub fn threshold_axes(sample: &mut AttributeSample, min: f64) {
    for axis in [&mut sample.x, &mut sample.y, &mut sample.z] {
        if *axis < min {
            *axis = f64::NAN;
        }
    }
}

/// Blank all three axes together when the squared magnitude is below `min`.
///
/// `min` is compared directly against `x² + y² + z²`; square a linear
/// threshold before passing it in.
pub fn threshold_magnitude(sample: &mut AttributeSample, min: f64) {
    if sample.magnitude_squared() < min {
        sample.x = f64::NAN;
        sample.y = f64::NAN;
        sample.z = f64::NAN;
    }
}

/// Low-pass filter over a sample series.
///
/// TODO: pick a cutoff and implement; passes data through unchanged for now.
pub fn low_pass(_samples: &mut [AttributeSample]) {}

/// Envelope follower over a sample series.
///
/// TODO: pick a window and implement; passes data through unchanged for now.
pub fn envelope(_samples: &mut [AttributeSample]) {}
