//! WAV import
//!
//! Reads WAV files into [`SampleBuffer`]s without rescaling: the integer
//! sample values and the declared bits per sample are preserved exactly,
//! because detection tests equality with the extremes of that quantization.
//! Float WAV has no fixed representable extreme and is rejected.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::audio::SampleBuffer;
use crate::error::{ClipcheckError, Result};

/// Bit depths accepted on import (all read as `i32` values)
const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Import a mono integer WAV file.
///
/// # Errors
/// * `FileNotFound` - if the file does not exist
/// * `InvalidAudio` - if the file is not a readable WAV file
/// * `UnsupportedFormat` - for float WAV or multi-channel audio
/// * `UnsupportedBitDepth` - for integer depths other than 8/16/24/32
/// * `EmptyAudio` - if the file contains no samples
pub fn import_wav(path: &Path) -> Result<SampleBuffer> {
    if !path.exists() {
        return Err(ClipcheckError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let mut reader = WavReader::open(path).map_err(|e| ClipcheckError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();

    if spec.sample_format == SampleFormat::Float {
        return Err(ClipcheckError::UnsupportedFormat {
            format: "float WAV (detection is defined on quantized integer samples)".to_string(),
        });
    }

    if spec.channels != 1 {
        return Err(ClipcheckError::UnsupportedFormat {
            format: format!("{}-channel audio (only mono supported)", spec.channels),
        });
    }

    if !SUPPORTED_BIT_DEPTHS.contains(&spec.bits_per_sample) {
        return Err(ClipcheckError::UnsupportedBitDepth {
            bits: spec.bits_per_sample,
        });
    }

    let samples = reader
        .samples::<i32>()
        .collect::<std::result::Result<Vec<i32>, _>>()
        .map_err(|e| ClipcheckError::InvalidAudio {
            reason: format!("Failed to read {}-bit samples: {}", spec.bits_per_sample, e),
            source: Some(Box::new(e)),
        })?;

    if samples.is_empty() {
        return Err(ClipcheckError::EmptyAudio);
    }

    log::debug!(
        "Imported {}: {} samples, {} Hz, {}-bit",
        path.display(),
        samples.len(),
        spec.sample_rate,
        spec.bits_per_sample
    );

    SampleBuffer::new(samples, spec.sample_rate, spec.bits_per_sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::tempdir;

    fn write_wav_i16(path: &Path, samples: &[i16], sample_rate: u32) {
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_import_preserves_integer_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples = vec![0i16, 100, 32_767, -500, i16::MIN];
        write_wav_i16(&path, &samples, 44_100);

        let buffer = import_wav(&path).unwrap();
        assert_eq!(buffer.sample_rate(), 44_100);
        assert_eq!(buffer.bit_depth(), 16);
        assert_eq!(buffer.samples(), &[0, 100, 32_767, -500, -32_768]);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_wav(Path::new("/nonexistent/path/audio.wav"));
        match result.unwrap_err() {
            ClipcheckError::FileNotFound { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("Expected FileNotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_float_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        let result = import_wav(&path);
        assert!(matches!(
            result,
            Err(ClipcheckError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_import_rejects_stereo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for sample in [0i16, 0, 100, 100] {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();

        let result = import_wav(&path);
        assert!(matches!(
            result,
            Err(ClipcheckError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_import_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        write_wav_i16(&path, &[], 44_100);

        let result = import_wav(&path);
        assert!(matches!(result, Err(ClipcheckError::EmptyAudio)));
    }
}
