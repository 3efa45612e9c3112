//! Clipping detection
//!
//! A clipped recording has samples pinned at the representable extreme of
//! its bit depth. Detection is an equality scan against the theoretical
//! extremes; no calibration is required and no state is kept between calls.
//!
//! Two boundary rules exist. The signed-range rule flags either signed
//! extreme and is the default. The unsigned-max rule flags only
//! `2^bits - 1`, a boundary that valid signed audio never reaches; it is
//! kept as an explicit named variant so callers can pick it deliberately.

use num_traits::{PrimInt, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::detect::{AnalysisValues, Calibration, CalibrationReport, Detection, Detector};

/// Sampling frequency this detector supports, in Hz
pub const SUPPORTED_SAMPLE_RATE: u32 = 44_100;

/// Bit depths this detector supports
pub const SUPPORTED_BIT_DEPTHS: [u16; 1] = [16];

/// Recommended analysis window in seconds
pub const DEFAULT_SEGMENT_SECS: f32 = 0.2;

/// Segments analyzed per invocation
pub const SEGMENTS_PER_RUN: u32 = 1;

/// Message surfaced to the user when a segment flags
pub const NOTIFICATION_MESSAGE: &str = "Clipping detected!";

/// Calibration status message: clipping needs no per-device calibration
pub const CALIBRATION_MESSAGE: &str = "No calibration necessary.";

/// Signed extremes `(maximum, minimum)` representable at `bit_depth` bits.
///
/// `maximum = 2^bits / 2 - 1`, `minimum = -maximum - 1`; for 16-bit audio
/// that is `(32767, -32768)`. Depths are clamped to 1..=63 so the result
/// stays representable in `i64`; anything outside that range is malformed
/// input with no specified behavior.
pub fn signed_extremes(bit_depth: u16) -> (i64, i64) {
    let bits = bit_depth.clamp(1, 63) as u32;
    let maximum = (1i64 << (bits - 1)) - 1;
    (maximum, -maximum - 1)
}

/// Flag a segment whose samples reach either signed extreme.
///
/// Returns [`Detection::Detected`] if any sample equals the maximum or
/// minimum representable value at `bit_depth` bits. An empty segment can
/// never flag. Samples beyond the theoretical range are not flagged; only
/// exact equality with the boundary counts.
pub fn analyze_signed_range<S: PrimInt>(audio: &[S], bit_depth: u16) -> Detection {
    let (maximum, minimum) = signed_extremes(bit_depth);
    let clipped = audio
        .iter()
        .filter_map(|s| s.to_i64())
        .any(|s| s == maximum || s == minimum);
    Detection::from(clipped)
}

/// Flag a segment whose samples reach the unsigned boundary `2^bits - 1`.
///
/// For correctly quantized signed audio this boundary never occurs, so this
/// rule stays silent on such input; it only fires on unsigned-style data.
pub fn analyze_unsigned_max<S: PrimInt>(audio: &[S], bit_depth: u16) -> Detection {
    let bits = bit_depth.clamp(1, 62) as u32;
    let boundary = (1i64 << bits) - 1;
    let clipped = audio.iter().filter_map(|s| s.to_i64()).any(|s| s == boundary);
    Detection::from(clipped)
}

/// Boundary rule used by the detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ClipRule {
    /// Flag samples at either signed extreme (the only rule that can fire
    /// on valid signed audio)
    #[default]
    SignedRange,
    /// Flag only samples equal to `2^bits - 1`
    UnsignedMax,
}

impl ClipRule {
    /// Run this rule over one segment
    pub fn analyze<S: PrimInt>(self, audio: &[S], bit_depth: u16) -> Detection {
        match self {
            ClipRule::SignedRange => analyze_signed_range(audio, bit_depth),
            ClipRule::UnsignedMax => analyze_unsigned_max(audio, bit_depth),
        }
    }
}

/// Clipping detection mode
///
/// Stateless; a single instance is safely shareable across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClippingDetector {
    rule: ClipRule,
}

impl ClippingDetector {
    /// Create a detector using the default signed-range rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector using an explicit boundary rule
    pub fn with_rule(rule: ClipRule) -> Self {
        Self { rule }
    }

    /// The boundary rule this detector applies
    pub fn rule(&self) -> ClipRule {
        self.rule
    }
}

impl Detector for ClippingDetector {
    fn name(&self) -> &'static str {
        "clipping"
    }

    fn calibrate(&self, report: &mut dyn CalibrationReport) -> Calibration {
        report.report(CALIBRATION_MESSAGE);
        Calibration {
            sample_rate: SUPPORTED_SAMPLE_RATE,
            bit_depths: SUPPORTED_BIT_DEPTHS.to_vec(),
        }
    }

    fn default_segment_length(&self) -> f32 {
        DEFAULT_SEGMENT_SECS
    }

    fn analysis_values(&self) -> AnalysisValues {
        AnalysisValues {
            segments: SEGMENTS_PER_RUN,
            message: NOTIFICATION_MESSAGE,
        }
    }

    fn analyze(&self, audio: &[i32], _fs: u32, bit_depth: u16) -> Detection {
        self.rule.analyze(audio, bit_depth)
    }
}
