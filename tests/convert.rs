use std::cell::RefCell;
use std::io::Write;

use silk2wav::wav::HEADER_LEN;
use silk2wav::{
    convert, decode_stream, ConvertOptions, DecControl, Decoder, DecoderState, Error, SilkCodec,
};

/// Test codec: every packet decodes to `payload.len()` samples holding the
/// running frame number, kept in the decoder instance memory. A payload
/// starting with 0xEE fails with status -1.
#[derive(Default)]
struct Scripted {
    init_status: i32,
    controls: RefCell<Vec<DecControl>>,
}

impl SilkCodec for Scripted {
    fn decoder_size(&self) -> Result<usize, i32> {
        Ok(4)
    }

    fn init_decoder(&self, state: &mut DecoderState) -> i32 {
        state.as_bytes_mut().copy_from_slice(&[0, 0, 0, 0]);
        self.init_status
    }

    fn decode(
        &self,
        state: &mut DecoderState,
        control: &mut DecControl,
        _lost: bool,
        payload: &[u8],
        samples: &mut [i16],
    ) -> Result<usize, i32> {
        self.controls.borrow_mut().push(*control);
        if payload[0] == 0xee {
            return Err(-1);
        }

        let bytes = state.as_bytes_mut();
        let frame = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) + 1;
        bytes.copy_from_slice(&frame.to_le_bytes());

        for s in samples.iter_mut().take(payload.len()) {
            *s = frame as i16;
        }
        Ok(payload.len())
    }
}

fn packet(payload: &[u8]) -> Vec<u8> {
    let mut out = (payload.len() as u16).to_le_bytes().to_vec();
    out.extend_from_slice(payload);
    out
}

fn silk_file(packets: &[&[u8]]) -> Vec<u8> {
    let mut out = b"\x02#!SILK_V3".to_vec();
    for p in packets {
        out.extend(packet(p));
    }
    out
}

#[test]
fn test_convert_produces_wav() {
    let codec = Scripted::default();
    let input = silk_file(&[&[1, 2], &[3]]);

    let wav = convert(&codec, &input, &ConvertOptions::default()).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(wav.len(), HEADER_LEN + 6);
    assert_eq!(&wav[40..44], &6u32.to_le_bytes());
    // frame 1 twice, then frame 2
    assert_eq!(&wav[HEADER_LEN..], &[1, 0, 1, 0, 2, 0]);
}

#[test]
fn test_every_call_gets_fresh_control() {
    let codec = Scripted::default();
    let input = silk_file(&[&[1], &[2], &[3]]);

    convert(&codec, &input, &ConvertOptions::with_sample_rate(16000).unwrap()).unwrap();

    let controls = codec.controls.borrow();
    assert_eq!(controls.len(), 3);
    for control in controls.iter() {
        assert_eq!(*control, DecControl::new(16000));
        assert_eq!(control.frames_per_packet, 1);
    }
}

#[test]
fn test_invalid_header_skips_decoding() {
    let codec = Scripted::default();
    let err = convert(&codec, b"RIFF....WAVE", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidHeader));
    assert!(codec.controls.borrow().is_empty());
}

#[test]
fn test_init_failure_is_reported() {
    let codec = Scripted {
        init_status: 2,
        ..Scripted::default()
    };
    let err = convert(&codec, &silk_file(&[&[1]]), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Init(2)));
    assert!(codec.controls.borrow().is_empty());
}

#[test]
fn test_decode_failure_keeps_earlier_audio() {
    let codec = Scripted::default();
    let mut decoder = Decoder::new(&codec).unwrap();

    let mut body = packet(&[1, 1]);
    body.extend(packet(&[0xee]));
    body.extend(packet(&[1, 1, 1]));

    let pcm = decode_stream(&mut decoder, 24000, &body);
    assert_eq!(pcm, vec![1, 0, 1, 0]);
    assert_eq!(codec.controls.borrow().len(), 2);
}

#[test]
fn test_truncated_stream_keeps_earlier_audio() {
    let codec = Scripted::default();
    let mut input = silk_file(&[&[5, 5]]);
    // trailer some encoders append
    input.extend_from_slice(&[0xff, 0xff]);

    let wav = convert(&codec, &input, &ConvertOptions::default()).unwrap();
    assert_eq!(wav.len(), HEADER_LEN + 4);
}

#[test]
fn test_stream_without_audio_fails() {
    let codec = Scripted::default();

    let err = convert(&codec, b"#!SILK_V3", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NoAudio));

    let err = convert(&codec, &silk_file(&[&[0xee]]), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NoAudio));
}

#[test]
fn test_decoder_state_persists_across_frames() {
    let codec = Scripted::default();
    let mut decoder = Decoder::new(&codec).unwrap();
    let mut out = [0i16; 4];

    for expected in 1..=3 {
        let n = decoder.decode_frame_samples(8000, &[0], &mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(out[0], expected);
    }
    decoder.close();

    // a new instance starts from a freshly initialized state
    let mut decoder = Decoder::new(&codec).unwrap();
    decoder.decode_frame_samples(8000, &[0], &mut out).unwrap();
    assert_eq!(out[0], 1);
}

#[test]
fn test_wav_written_to_disk() {
    let codec = Scripted::default();
    let wav = convert(&codec, &silk_file(&[&[1, 2, 3]]), &ConvertOptions::default()).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&wav).unwrap();

    let read_back = std::fs::read(file.path()).unwrap();
    assert_eq!(read_back, wav);
    assert_eq!(&read_back[24..28], &24000u32.to_le_bytes());
}
