//! Clipcheck - Clipping Detection for Quantized Audio
//!
//! Clipcheck analyzes recordings for digital clipping: samples pinned at the
//! representable extreme of their bit depth, which indicates the signal was
//! driven past full scale during capture or processing.
//!
//! # Architecture
//!
//! - `detect`: the detection mode interface and the clipping detector itself
//! - `audio`: integer sample buffers and WAV import
//! - `report`: serializable per-file analysis results
//! - `cli`: the command-line front end
//!
//! The detector operates on already-segmented audio; callers (such as the
//! bundled CLI) own capture, windowing per
//! [`Detector::default_segment_length`](detect::Detector::default_segment_length),
//! and surfacing of the notification message.

pub mod audio;
pub mod cli;
pub mod detect;
pub mod error;
pub mod report;

pub use audio::SampleBuffer;
pub use detect::{
    AnalysisValues, Calibration, CalibrationReport, ClipRule, ClippingDetector, Detection,
    Detector,
};
pub use error::{ClipcheckError, Result};
pub use report::AnalysisReport;
