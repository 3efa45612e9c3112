//! CLI Module
//!
//! Command-line interface for the Clipcheck analyzer.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::detect::ClipRule;

/// Clipcheck - clipping detection for quantized audio recordings
#[derive(Parser, Debug)]
#[command(name = "clipcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a WAV file for clipping
    #[command(name = "analyze")]
    Analyze {
        /// WAV file to analyze
        file: PathBuf,

        /// Analysis window in seconds (defaults to the detector's
        /// recommended segment length)
        #[arg(short, long)]
        segment_length: Option<f32>,

        /// Boundary rule to apply
        #[arg(long, value_enum, default_value_t)]
        rule: ClipRule,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze every WAV file under a directory
    #[command(name = "scan")]
    Scan {
        /// Directory to walk for .wav files
        dir: PathBuf,

        /// Boundary rule to apply
        #[arg(long, value_enum, default_value_t)]
        rule: ClipRule,

        /// Emit the reports as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show calibration status and supported capture formats
    #[command(name = "calibrate")]
    Calibrate,
}
