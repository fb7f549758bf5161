//! Decoder adapter over the SILK speech codec, and a SILK v3 to WAV converter.
//!
//! ```ignore
//! use silk2wav::{convert, sdk::SkpSilk, ConvertOptions};
//!
//! let silk = std::fs::read("voice.silk")?;
//! let wav = convert(SkpSilk, &silk, &ConvertOptions::default())?;
//! std::fs::write("voice.wav", wav)?;
//! ```

pub mod codec;
pub mod container;
pub mod convert;
pub mod decoder;
pub mod error;
#[cfg(feature = "sdk")]
pub mod sdk;
pub mod wav;

pub use codec::{DecControl, DecoderState, SilkCodec};
pub use convert::{convert, decode_stream, ConvertOptions};
pub use decoder::Decoder;
pub use error::{Error, Result};

pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

/// Output sample rates the SILK decoder can produce.
pub const SUPPORTED_SAMPLE_RATES: [u32; 7] = [8000, 12000, 16000, 24000, 32000, 44100, 48000];

/// PCM bytes for the largest decode: 20 ms at 48 kHz, five frames, 16-bit,
/// with 2x headroom.
pub const MAX_FRAME_BYTES: usize = 20 * 48 * 5 * 2 * 2;

pub const MAX_FRAME_SAMPLES: usize = MAX_FRAME_BYTES / 2;
