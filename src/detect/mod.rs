//! Detection modes
//!
//! Every defect detector exposes the same four operations: calibration,
//! a recommended segment length, the values a caller needs to drive an
//! analysis run, and the analysis itself. The trait keeps that surface
//! uniform so front ends can drive any mode without knowing which defect
//! it looks for.

mod clipping;

pub use clipping::{analyze_signed_range, analyze_unsigned_max, signed_extremes};
pub use clipping::{ClipRule, ClippingDetector};

use serde::{Deserialize, Serialize};

/// Outcome of a single analysis call.
///
/// Serializes as the raw flag (`0` clear, `1` detected) so reports keep the
/// numeric convention callers already expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Detection {
    /// No defect found in the segment
    Clear,
    /// The defect was found in the segment
    Detected,
}

impl Detection {
    /// True if the defect was found
    pub fn is_detected(self) -> bool {
        matches!(self, Detection::Detected)
    }

    /// The raw flag value: 1 if detected, 0 otherwise
    pub fn as_flag(self) -> u8 {
        match self {
            Detection::Clear => 0,
            Detection::Detected => 1,
        }
    }
}

impl From<bool> for Detection {
    fn from(detected: bool) -> Self {
        if detected {
            Detection::Detected
        } else {
            Detection::Clear
        }
    }
}

impl From<Detection> for u8 {
    fn from(detection: Detection) -> Self {
        detection.as_flag()
    }
}

impl TryFrom<u8> for Detection {
    type Error = String;

    fn try_from(flag: u8) -> std::result::Result<Self, Self::Error> {
        match flag {
            0 => Ok(Detection::Clear),
            1 => Ok(Detection::Detected),
            other => Err(format!("invalid detection flag: {}", other)),
        }
    }
}

/// Capture parameters a detection mode supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calibration {
    /// Supported sampling frequency in Hz
    pub sample_rate: u32,
    /// Supported bit depths, in bits per sample
    pub bit_depths: Vec<u16>,
}

/// Values a caller needs to run an analysis and surface its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisValues {
    /// Number of segments the mode analyzes per invocation
    pub segments: u32,
    /// Message to surface when a segment flags
    pub message: &'static str,
}

/// Sink for human-readable calibration status messages.
///
/// Injected into [`Detector::calibrate`] rather than routed through a global
/// logger, so tests and alternative front ends can capture what was said.
pub trait CalibrationReport {
    /// Receive one status message
    fn report(&mut self, message: &str);
}

impl<F: FnMut(&str)> CalibrationReport for F {
    fn report(&mut self, message: &str) {
        self(message)
    }
}

/// Common surface of a detection mode
pub trait Detector {
    /// Short identifier for this mode
    fn name(&self) -> &'static str;

    /// Run device calibration, reporting progress through `report`.
    ///
    /// Returns the capture parameters the mode supports. Modes that need no
    /// calibration still report that fact exactly once.
    fn calibrate(&self, report: &mut dyn CalibrationReport) -> Calibration;

    /// Recommended analysis window size in seconds for callers that segment
    /// audio before calling [`analyze`](Detector::analyze)
    fn default_segment_length(&self) -> f32;

    /// Segment count and notification message for this mode
    fn analysis_values(&self) -> AnalysisValues;

    /// Analyze one segment of quantized samples.
    ///
    /// `fs` is the capture sampling frequency in Hz; some modes ignore it.
    /// `bit_depth` determines the representable sample range.
    fn analyze(&self, audio: &[i32], fs: u32, bit_depth: u16) -> Detection;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_flags() {
        assert_eq!(Detection::Clear.as_flag(), 0);
        assert_eq!(Detection::Detected.as_flag(), 1);
        assert!(Detection::Detected.is_detected());
        assert!(!Detection::Clear.is_detected());
    }

    #[test]
    fn test_detection_from_bool() {
        assert_eq!(Detection::from(true), Detection::Detected);
        assert_eq!(Detection::from(false), Detection::Clear);
    }

    #[test]
    fn test_detection_serializes_as_flag() {
        let json = serde_json::to_string(&Detection::Detected).unwrap();
        assert_eq!(json, "1");
        let back: Detection = serde_json::from_str("0").unwrap();
        assert_eq!(back, Detection::Clear);
        assert!(serde_json::from_str::<Detection>("2").is_err());
    }

    #[test]
    fn test_closure_is_a_calibration_report() {
        let mut messages: Vec<String> = Vec::new();
        {
            let mut capture = |m: &str| messages.push(m.to_string());
            capture.report("hello");
        }
        assert_eq!(messages, vec!["hello"]);
    }
}
