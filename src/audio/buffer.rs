//! Integer sample buffer
//!
//! SampleBuffer is the container handed to detection modes: one mono
//! channel of quantized samples plus the capture metadata the modes need.

use crate::detect::signed_extremes;
use crate::error::{ClipcheckError, Result};

/// Mono quantized audio with capture metadata
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Quantized samples, centered at zero (signed representation)
    samples: Vec<i32>,
    /// Sample rate in Hz
    sample_rate: u32,
    /// Bits per sample of the source quantization
    bit_depth: u16,
}

impl SampleBuffer {
    /// Create a buffer from existing samples
    pub fn new(samples: Vec<i32>, sample_rate: u32, bit_depth: u16) -> Result<Self> {
        if samples.is_empty() {
            return Err(ClipcheckError::EmptyAudio);
        }
        Ok(Self {
            samples,
            sample_rate,
            bit_depth,
        })
    }

    /// Create a silent buffer with the given duration
    pub fn silence(duration_secs: f32, sample_rate: u32, bit_depth: u16) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        Self {
            samples: vec![0; num_samples],
            sample_rate,
            bit_depth,
        }
    }

    /// Create a quantized sine test tone.
    ///
    /// `amplitude` is relative to full scale; values above 1.0 drive the
    /// waveform past the representable range and the excess is clamped to
    /// the signed extremes, producing a genuinely clipped signal.
    pub fn test_tone(
        frequency: f32,
        amplitude: f32,
        duration_secs: f32,
        sample_rate: u32,
        bit_depth: u16,
    ) -> Self {
        let (maximum, minimum) = signed_extremes(bit_depth);
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let mut samples = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let t = i as f32 / sample_rate as f32;
            let value = amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin();
            let quantized = (value as f64 * maximum as f64).round() as i64;
            samples.push(quantized.clamp(minimum, maximum) as i32);
        }

        Self {
            samples,
            sample_rate,
            bit_depth,
        }
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the bit depth
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Split the buffer into analysis windows of `segment_secs` seconds.
    ///
    /// The final window may be shorter than the rest; it is still yielded,
    /// since a per-sample test loses nothing on a short window. Segment
    /// lengths that round to zero samples fall back to one sample.
    pub fn segments(&self, segment_secs: f32) -> impl Iterator<Item = &[i32]> {
        let window = ((segment_secs * self.sample_rate as f32) as usize).max(1);
        self.samples.chunks(window)
    }
}
