use std::convert::TryFrom;

use tracing::{debug, error};

use crate::codec::{DecControl, DecoderState, SilkCodec};
use crate::error::{Error, Result};
use crate::MAX_FRAME_SAMPLES;

/// One SILK decoder instance.
///
/// The instance memory is sized by the codec, initialized once in
/// [`Decoder::new`] and released when the decoder is dropped. A `Decoder`
/// only exists after a successful init, so there is no null handle to decode
/// with.
pub struct Decoder<C> {
    codec: C,
    state: DecoderState,
    scratch: Box<[i16]>,
}

impl<C: SilkCodec> Decoder<C> {
    pub fn new(codec: C) -> Result<Self> {
        let size = codec.decoder_size().map_err(|ret| {
            error!("SKP_Silk_SDK_Get_Decoder_Size returned {}", ret);
            Error::Size(ret)
        })?;

        let mut state = DecoderState::zeroed(size);
        let ret = codec.init_decoder(&mut state);
        if ret != 0 {
            drop(state);
            error!("SKP_Silk_SDK_InitDecoder returned {}", ret);
            return Err(Error::Init(ret));
        }
        debug!(size, "decoder initialized");

        Ok(Self {
            codec,
            state,
            scratch: vec![0; MAX_FRAME_SAMPLES].into_boxed_slice(),
        })
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Decode one compressed frame into 16-bit little-endian PCM bytes.
    ///
    /// Returns the number of bytes written to `out`, which is twice the number
    /// of samples the codec produced.
    pub fn decode_frame(&mut self, sample_rate: u32, payload: &[u8], out: &mut [u8]) -> Result<usize> {
        let samples = self.decode_into_scratch(sample_rate, payload)?;
        let needed = samples * 2;
        if out.len() < needed {
            return Err(Error::OutputTooSmall {
                needed,
                available: out.len(),
            });
        }

        for (dst, sample) in out.chunks_exact_mut(2).zip(&self.scratch[..samples]) {
            dst.copy_from_slice(&sample.to_le_bytes());
        }

        Ok(needed)
    }

    /// Decode one compressed frame into `out`, returning the sample count.
    pub fn decode_frame_samples(
        &mut self,
        sample_rate: u32,
        payload: &[u8],
        out: &mut [i16],
    ) -> Result<usize> {
        let samples = self.decode_into_scratch(sample_rate, payload)?;
        if out.len() < samples {
            return Err(Error::OutputTooSmall {
                needed: samples * 2,
                available: out.len() * 2,
            });
        }
        out[..samples].copy_from_slice(&self.scratch[..samples]);

        Ok(samples)
    }

    /// Release the decoder instance.
    pub fn close(self) {}

    fn decode_into_scratch(&mut self, sample_rate: u32, payload: &[u8]) -> Result<usize> {
        if payload.is_empty() {
            return Err(Error::EmptyPayload);
        }
        let api_rate =
            i32::try_from(sample_rate).map_err(|_| Error::UnsupportedSampleRate(sample_rate))?;

        let mut control = DecControl::new(api_rate);
        let samples = self
            .codec
            .decode(&mut self.state, &mut control, false, payload, &mut self.scratch)
            .map_err(|ret| {
                error!("SKP_Silk_SDK_Decode returned {}", ret);
                Error::Decode(ret)
            })?;

        if samples > self.scratch.len() {
            return Err(Error::OutputTooSmall {
                needed: samples * 2,
                available: self.scratch.len() * 2,
            });
        }

        Ok(samples)
    }
}
