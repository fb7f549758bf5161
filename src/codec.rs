//! The boundary to the SILK codec library.
//!
//! The decoder adapter only needs three things from a codec: the size of a
//! decoder instance, a way to initialize one in caller memory, and a call that
//! decodes one compressed frame into caller memory. [`SilkCodec`] names those
//! three contract points; `sdk::SkpSilk` (feature `sdk`) implements them over
//! the SKP SILK SDK.

use std::os::raw::c_void;

/// Output control block handed to the codec on every decode call.
///
/// Layout matches `SKP_SILK_SDK_DecControlStruct`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecControl {
    /// Output sample rate requested from the decoder, in Hz.
    pub api_sample_rate: i32,
    /// Samples per frame, written by the codec.
    pub frame_size: i32,
    /// Frames per packet expected by the caller.
    pub frames_per_packet: i32,
    /// Set by the codec when the packet holds more frames.
    pub more_internal_decoder_frames: i32,
    /// Distance to the in-band FEC frame, written by the codec.
    pub in_band_fec_offset: i32,
}

impl DecControl {
    pub fn new(api_sample_rate: i32) -> Self {
        Self {
            api_sample_rate,
            frames_per_packet: 1,
            ..Self::default()
        }
    }
}

/// Memory backing one decoder instance.
///
/// The block is zeroed on allocation and aligned to 8 bytes, which covers the
/// integer state the SDK keeps in it.
pub struct DecoderState {
    words: Box<[u64]>,
    len: usize,
}

impl DecoderState {
    pub(crate) fn zeroed(len: usize) -> Self {
        let words = vec![0u64; (len + 7) / 8].into_boxed_slice();
        Self { words, len }
    }

    /// Size in bytes, as reported by the codec.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.words.as_mut_ptr() as *mut c_void
    }

    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.words.as_ptr() as *const u8, self.len) }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.words.as_mut_ptr() as *mut u8, self.len) }
    }
}

/// A SILK decoder implementation.
///
/// Status codes follow the SDK convention: zero is success, anything else is
/// a codec error that the adapter reports unchanged.
pub trait SilkCodec {
    /// Bytes needed for one decoder instance.
    fn decoder_size(&self) -> Result<usize, i32>;

    /// Initialize a freshly allocated instance. Returns the codec status.
    fn init_decoder(&self, state: &mut DecoderState) -> i32;

    /// Decode one compressed frame into `samples`, returning how many samples
    /// were written.
    fn decode(
        &self,
        state: &mut DecoderState,
        control: &mut DecControl,
        lost: bool,
        payload: &[u8],
        samples: &mut [i16],
    ) -> Result<usize, i32>;
}

impl<C: SilkCodec + ?Sized> SilkCodec for &C {
    fn decoder_size(&self) -> Result<usize, i32> {
        (**self).decoder_size()
    }

    fn init_decoder(&self, state: &mut DecoderState) -> i32 {
        (**self).init_decoder(state)
    }

    fn decode(
        &self,
        state: &mut DecoderState,
        control: &mut DecControl,
        lost: bool,
        payload: &[u8],
        samples: &mut [i16],
    ) -> Result<usize, i32> {
        (**self).decode(state, control, lost, payload, samples)
    }
}
