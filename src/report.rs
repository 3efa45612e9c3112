//! Per-file analysis reports
//!
//! The caller-side loop: window a buffer per the detector's recommended
//! segment length, run the detector over every window, and collect the
//! outcome into a serializable report. The detector itself stays a
//! per-segment predicate; whole-file behavior is the OR of the per-segment
//! flags.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audio::SampleBuffer;
use crate::detect::{ClipRule, Detection, Detector};

/// Outcome of analyzing one file or buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Source file, if the audio came from one
    pub path: Option<String>,
    /// Sample rate of the analyzed audio in Hz
    pub sample_rate: u32,
    /// Bit depth of the analyzed audio
    pub bit_depth: u16,
    /// Boundary rule that was applied
    pub rule: ClipRule,
    /// Window size used for segmentation, in seconds
    pub segment_secs: f32,
    /// Number of windows analyzed
    pub segments_analyzed: usize,
    /// Number of windows that flagged
    pub segments_flagged: usize,
    /// Overall detection flag (1 if any window flagged)
    pub detection: Detection,
    /// Notification message, present when the detection flag is set
    pub message: Option<String>,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let source = self.path.as_deref().unwrap_or("<buffer>");
        match &self.message {
            Some(message) => format!(
                "{}: {} ({}/{} segments)",
                source, message, self.segments_flagged, self.segments_analyzed
            ),
            None => format!(
                "{}: clean ({} segments)",
                source, self.segments_analyzed
            ),
        }
    }
}

/// Analyze a buffer window by window with the given detection mode.
///
/// `segment_secs` overrides the mode's recommended window size; `rule`
/// records which boundary rule the detector was built with so the report
/// can state it. The trailing partial window is analyzed like any other.
pub fn run_analysis(
    detector: &dyn Detector,
    buffer: &SampleBuffer,
    segment_secs: Option<f32>,
    rule: ClipRule,
    path: Option<&Path>,
) -> AnalysisReport {
    let segment_secs = segment_secs.unwrap_or_else(|| detector.default_segment_length());
    let values = detector.analysis_values();

    let mut segments_analyzed = 0;
    let mut segments_flagged = 0;
    for window in buffer.segments(segment_secs) {
        segments_analyzed += 1;
        if detector
            .analyze(window, buffer.sample_rate(), buffer.bit_depth())
            .is_detected()
        {
            segments_flagged += 1;
        }
    }

    let detection = Detection::from(segments_flagged > 0);
    log::info!(
        "Analyzed {} segments, {} flagged",
        segments_analyzed,
        segments_flagged
    );

    AnalysisReport {
        path: path.map(|p| p.display().to_string()),
        sample_rate: buffer.sample_rate(),
        bit_depth: buffer.bit_depth(),
        rule,
        segment_secs,
        segments_analyzed,
        segments_flagged,
        detection,
        message: detection
            .is_detected()
            .then(|| values.message.to_string()),
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::ClippingDetector;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_buffer_report() {
        let detector = ClippingDetector::new();
        let buffer = SampleBuffer::test_tone(440.0, 0.9, 1.0, 44_100, 16);

        let report = run_analysis(&detector, &buffer, None, detector.rule(), None);

        assert_eq!(report.detection, Detection::Clear);
        assert_eq!(report.segments_flagged, 0);
        assert_eq!(report.segments_analyzed, 5);
        assert_eq!(report.message, None);
        assert!(report.summary().contains("clean"));
    }

    #[test]
    fn test_clipped_buffer_report() {
        let detector = ClippingDetector::new();
        let buffer = SampleBuffer::test_tone(440.0, 1.5, 1.0, 44_100, 16);

        let report = run_analysis(&detector, &buffer, None, detector.rule(), None);

        assert_eq!(report.detection, Detection::Detected);
        assert_eq!(report.message.as_deref(), Some("Clipping detected!"));
        assert!(report.segments_flagged > 0);
        assert!(report.summary().contains("Clipping detected!"));
    }

    #[test]
    fn test_segment_override() {
        let detector = ClippingDetector::new();
        let buffer = SampleBuffer::silence(1.0, 44_100, 16);

        let report = run_analysis(&detector, &buffer, Some(0.5), detector.rule(), None);

        assert_eq!(report.segments_analyzed, 2);
        assert!((report.segment_secs - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_report_serializes_detection_as_flag() {
        let detector = ClippingDetector::new();
        let buffer = SampleBuffer::test_tone(440.0, 1.5, 0.4, 44_100, 16);

        let report = run_analysis(&detector, &buffer, None, detector.rule(), None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["detection"], 1);
        assert_eq!(json["rule"], "signed_range");
        assert_eq!(json["message"], "Clipping detected!");
    }
}
