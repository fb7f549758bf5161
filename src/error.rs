use thiserror::Error;

/// Errors raised while creating decoders, decoding frames and converting streams.
///
/// Codec failures keep the raw status code returned by the SILK library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("codec could not report its decoder size (status {0})")]
    Size(i32),

    #[error("SKP_Silk_SDK_InitDecoder returned {0}")]
    Init(i32),

    #[error("SKP_Silk_SDK_Decode returned {0}")]
    Decode(i32),

    #[error("empty payload")]
    EmptyPayload,

    #[error("output buffer too small: {needed} bytes needed, {available} available")]
    OutputTooSmall { needed: usize, available: usize },

    #[error("invalid header")]
    InvalidHeader,

    #[error("unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),

    #[error("failed to decode: stream produced no audio")]
    NoAudio,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
