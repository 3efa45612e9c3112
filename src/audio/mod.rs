//! Audio containers and file import
//!
//! Clipcheck works on quantized integer samples; buffers keep the original
//! integer values and the declared bit depth rather than normalizing to
//! float, since the detector tests exact equality with the representable
//! extremes.

mod buffer;
mod io;

pub use buffer::SampleBuffer;
pub use io::import_wav;
