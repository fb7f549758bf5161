use std::io::{self, Write};

pub const HEADER_LEN: usize = 44;

/// Canonical RIFF/WAVE header for uncompressed PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub data_len: u32,
}

impl WavHeader {
    pub fn pcm16_mono(sample_rate: u32, data_len: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
            bits_per_sample: 16,
            data_len,
        }
    }

    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut hdr = [0u8; HEADER_LEN];
        hdr[0..4].copy_from_slice(b"RIFF");
        hdr[4..8].copy_from_slice(&(36 + self.data_len).to_le_bytes());
        hdr[8..12].copy_from_slice(b"WAVE");
        hdr[12..16].copy_from_slice(b"fmt ");
        hdr[16..20].copy_from_slice(&16u32.to_le_bytes());
        // 1 = PCM, not compressed
        hdr[20..22].copy_from_slice(&1u16.to_le_bytes());
        hdr[22..24].copy_from_slice(&self.channels.to_le_bytes());
        hdr[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        hdr[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        hdr[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        hdr[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        hdr[36..40].copy_from_slice(b"data");
        hdr[40..44].copy_from_slice(&self.data_len.to_le_bytes());
        hdr
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        w.write_all(&self.to_bytes())
    }
}

/// Prepend a mono 16-bit WAV header to `pcm`.
pub fn wrap_pcm(sample_rate: u32, pcm: &[u8]) -> Vec<u8> {
    let hdr = WavHeader::pcm16_mono(sample_rate, pcm.len() as u32);
    let mut out = Vec::with_capacity(HEADER_LEN + pcm.len());
    out.extend_from_slice(&hdr.to_bytes());
    out.extend_from_slice(pcm);
    out
}
