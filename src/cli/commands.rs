//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::{info, warn};
use walkdir::WalkDir;

use crate::audio::import_wav;
use crate::detect::{ClipRule, ClippingDetector, Detector};
use crate::error::Result;
use crate::report::{run_analysis, AnalysisReport};

/// Analyze a single WAV file.
pub fn analyze(file: &Path, segment_length: Option<f32>, rule: ClipRule, json: bool) -> Result<()> {
    info!("Analyzing file: {}", file.display());

    let report = analyze_file(file, segment_length, rule)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}

/// Walk a directory and analyze every WAV file found.
pub fn scan(dir: &Path, rule: ClipRule, json: bool) -> Result<()> {
    info!("Scanning directory: {}", dir.display());

    let mut reports: Vec<AnalysisReport> = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_wav(e.path()))
    {
        match analyze_file(entry.path(), None, rule) {
            Ok(report) => {
                if !json {
                    println!("{}", report.summary());
                }
                reports.push(report);
            }
            Err(e) => warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let flagged = reports
            .iter()
            .filter(|r| r.detection.is_detected())
            .count();
        println!(
            "Scanned {} files, {} with clipping",
            reports.len(),
            flagged
        );
    }

    Ok(())
}

/// Run detector calibration with a stdout reporter.
pub fn calibrate() -> Result<()> {
    let detector = ClippingDetector::new();
    let mut print_status = |message: &str| println!("{}", message);
    let calibration = detector.calibrate(&mut print_status);

    println!("Supported sample rate: {} Hz", calibration.sample_rate);
    let depths: Vec<String> = calibration
        .bit_depths
        .iter()
        .map(|b| format!("{}-bit", b))
        .collect();
    println!("Supported bit depths: {}", depths.join(", "));

    Ok(())
}

fn analyze_file(file: &Path, segment_length: Option<f32>, rule: ClipRule) -> Result<AnalysisReport> {
    let buffer = import_wav(file)?;
    let detector = ClippingDetector::with_rule(rule);
    Ok(run_analysis(
        &detector,
        &buffer,
        segment_length,
        rule,
        Some(file),
    ))
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_wav() {
        assert!(is_wav(Path::new("take1.wav")));
        assert!(is_wav(Path::new("take1.WAV")));
        assert!(!is_wav(Path::new("take1.flac")));
        assert!(!is_wav(Path::new("wav")));
    }
}
