use tracing::{debug, warn};

use crate::codec::SilkCodec;
use crate::container::{strip_header, Packets};
use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::{wav, DEFAULT_SAMPLE_RATE, MAX_FRAME_BYTES, SUPPORTED_SAMPLE_RATES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl ConvertOptions {
    pub fn with_sample_rate(sample_rate: u32) -> Result<Self> {
        if !SUPPORTED_SAMPLE_RATES.contains(&sample_rate) {
            return Err(Error::UnsupportedSampleRate(sample_rate));
        }
        Ok(Self { sample_rate })
    }
}

/// Decode every packet of a stream body, concatenating the PCM.
///
/// The first packet that fails to decode ends the stream; PCM produced up
/// to that point is kept.
pub fn decode_stream<C: SilkCodec>(decoder: &mut Decoder<C>, sample_rate: u32, body: &[u8]) -> Vec<u8> {
    let mut pcm = Vec::new();
    let mut out = vec![0u8; MAX_FRAME_BYTES];
    let mut packets = 0usize;

    for payload in Packets::new(body) {
        match decoder.decode_frame(sample_rate, payload, &mut out) {
            Ok(olen) => pcm.extend_from_slice(&out[..olen]),
            Err(_) => {
                warn!("Failed to decode {} bytes", payload.len());
                break;
            }
        }
        packets += 1;
    }
    debug!(packets, bytes = pcm.len(), "stream decoded");

    pcm
}

/// Convert a SILK v3 stream into a mono 16-bit WAV file.
pub fn convert<C: SilkCodec>(codec: C, input: &[u8], options: &ConvertOptions) -> Result<Vec<u8>> {
    let body = strip_header(input)?;

    let mut decoder = Decoder::new(codec)?;
    let pcm = decode_stream(&mut decoder, options.sample_rate, body);
    decoder.close();

    if pcm.is_empty() {
        return Err(Error::NoAudio);
    }

    Ok(wav::wrap_pcm(options.sample_rate, &pcm))
}
