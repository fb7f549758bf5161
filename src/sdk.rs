#![allow(non_snake_case)]

use std::os::raw::{c_int, c_void};

use crate::codec::{DecControl, DecoderState, SilkCodec};
use crate::MAX_FRAME_SAMPLES;

extern "C" {
    fn SKP_Silk_SDK_Get_Decoder_Size(decSizeBytes: *mut i32) -> c_int;

    fn SKP_Silk_SDK_InitDecoder(decState: *mut c_void) -> c_int;

    fn SKP_Silk_SDK_Decode(
        decState: *mut c_void,
        decControl: *mut DecControl,
        lostFlag: c_int,
        inData: *const u8,
        nBytesIn: c_int,
        samplesOut: *mut i16,
        nSamplesOut: *mut i16,
    ) -> c_int;
}

/// The SKP SILK SDK, linked in by the build script.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkpSilk;

impl SilkCodec for SkpSilk {
    fn decoder_size(&self) -> Result<usize, i32> {
        let mut size = 0i32;
        let ret = unsafe { SKP_Silk_SDK_Get_Decoder_Size(&mut size) };
        if ret != 0 {
            return Err(ret);
        }
        if size < 0 {
            return Err(-1);
        }

        Ok(size as usize)
    }

    fn init_decoder(&self, state: &mut DecoderState) -> i32 {
        unsafe { SKP_Silk_SDK_InitDecoder(state.as_mut_ptr()) }
    }

    fn decode(
        &self,
        state: &mut DecoderState,
        control: &mut DecControl,
        lost: bool,
        payload: &[u8],
        samples: &mut [i16],
    ) -> Result<usize, i32> {
        // The SDK writes a whole frame without looking at the caller's capacity.
        let mut frame = [0i16; MAX_FRAME_SAMPLES];
        let mut used = MAX_FRAME_SAMPLES as i16;

        let ret = unsafe {
            SKP_Silk_SDK_Decode(
                state.as_mut_ptr(),
                control,
                lost as c_int,
                payload.as_ptr(),
                payload.len() as _,
                frame.as_mut_ptr(),
                &mut used,
            )
        };
        if ret != 0 {
            return Err(ret);
        }

        let used = used.max(0) as usize;
        let n = used.min(samples.len());
        samples[..n].copy_from_slice(&frame[..n]);

        Ok(used)
    }
}
