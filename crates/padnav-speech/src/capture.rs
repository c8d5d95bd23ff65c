#![forbid(unsafe_code)]

//! Per-channel sample accumulation between record and export.
//!
//! The host's audio callback hands over one chunk per channel at a time;
//! the buffer concatenates them lazily (chunks are kept as-is and merged
//! on export) so the audio thread never pays for a large copy.
//!
//! # Invariants
//!
//! 1. Every channel holds the same number of frames.
//! 2. A chunk is accepted whole or rejected whole; a failed `record` leaves
//!    the buffer untouched.

use tracing::trace;

use crate::error::CaptureError;
use crate::wav;

/// Accumulated capture data for a fixed number of channels.
#[derive(Debug, Clone)]
pub struct CaptureBuffer {
    /// Chunk lists, one per channel.
    chunks: Vec<Vec<Vec<f32>>>,
    frames: usize,
}

impl CaptureBuffer {
    /// Create an empty buffer for `channels` channels (at least one).
    #[must_use]
    pub fn new(channels: u16) -> Self {
        let channels = channels.max(1);
        Self {
            chunks: vec![Vec::new(); usize::from(channels)],
            frames: 0,
        }
    }

    /// Number of channels.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.chunks.len() as u16
    }

    /// Frames recorded so far (per channel).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Append one chunk per channel.
    ///
    /// The chunk must carry exactly one slice per channel, all the same
    /// length.
    pub fn record(&mut self, chunk: &[Vec<f32>]) -> Result<(), CaptureError> {
        if chunk.len() != self.chunks.len() {
            return Err(CaptureError::ChannelCountMismatch {
                expected: self.channels(),
                found: chunk.len(),
            });
        }
        let frames = chunk[0].len();
        for (channel, data) in chunk.iter().enumerate() {
            if data.len() != frames {
                return Err(CaptureError::UnevenChunk {
                    channel,
                    expected: frames,
                    found: data.len(),
                });
            }
        }
        for (channel, data) in chunk.iter().enumerate() {
            self.chunks[channel].push(data.clone());
        }
        self.frames += frames;
        trace!(frames, total = self.frames, "capture chunk recorded");
        Ok(())
    }

    /// Discard everything recorded so far.
    pub fn clear(&mut self) {
        for channel in &mut self.chunks {
            channel.clear();
        }
        self.frames = 0;
    }

    /// All frames of one channel, concatenated.
    #[must_use = "use the merged channel data (if any)"]
    pub fn merged(&self, channel: usize) -> Option<Vec<f32>> {
        let chunks = self.chunks.get(channel)?;
        let mut out = Vec::with_capacity(self.frames);
        for chunk in chunks {
            out.extend_from_slice(chunk);
        }
        Some(out)
    }

    /// All channels merged and interleaved, frame by frame.
    #[must_use]
    pub fn interleaved(&self) -> Vec<f32> {
        let merged: Vec<Vec<f32>> = (0..self.chunks.len())
            .filter_map(|c| self.merged(c))
            .collect();
        let mut out = Vec::with_capacity(self.frames * merged.len());
        for frame in 0..self.frames {
            for channel in &merged {
                out.push(channel[frame]);
            }
        }
        out
    }

    /// Encode the first channel as a mono WAV file.
    ///
    /// This is the export the speech backend consumes; the remaining
    /// channels stay available via [`interleaved`](Self::interleaved) and
    /// [`export_wav`](Self::export_wav).
    #[must_use]
    pub fn export_mono_wav(&self, sample_rate: u32) -> Vec<u8> {
        let samples = self.merged(0).unwrap_or_default();
        wav::encode_wav(&samples, sample_rate, 1)
    }

    /// Encode all channels, interleaved, as a WAV file.
    #[must_use]
    pub fn export_wav(&self, sample_rate: u32) -> Vec<u8> {
        wav::encode_wav(&self.interleaved(), sample_rate, self.channels())
    }
}

// =========================================================================
// Tests
// =========================================================================
