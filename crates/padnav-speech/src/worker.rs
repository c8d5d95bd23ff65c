#![forbid(unsafe_code)]

//! Dedicated capture thread speaking a small command protocol.
//!
//! The audio callback must never block on encoding, so accumulation and
//! WAV export live on their own thread behind an mpsc channel. The worker
//! owns its [`CaptureBuffer`] exclusively; callers interact only through
//! messages, and requests that need an answer carry their own reply
//! channel.
//!
//! # Error Propagation
//!
//! A dead worker surfaces as [`CaptureError::WorkerGone`] on the next
//! call; chunk validation errors are returned synchronously before a chunk
//! is ever sent.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::capture::CaptureBuffer;
use crate::error::CaptureError;

/// Capture parameters fixed at worker start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Sample rate written into exported WAV headers.
    pub sample_rate: u32,
    /// Channels per chunk.
    pub channels: u16,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
        }
    }
}

/// Messages sent from the host to the capture thread.
enum CaptureMsg {
    Record(Vec<Vec<f32>>),
    ExportWav { reply: mpsc::Sender<Vec<u8>> },
    TakeBuffer { reply: mpsc::Sender<Vec<Vec<f32>>> },
    Clear,
    Shutdown,
}

/// Handle to a running capture thread.
///
/// Dropping the handle shuts the thread down and joins it.
pub struct CaptureWorker {
    sender: mpsc::Sender<CaptureMsg>,
    handle: Option<JoinHandle<()>>,
    config: CaptureConfig,
}

impl CaptureWorker {
    /// Spawn the capture thread.
    #[must_use]
    pub fn start(config: CaptureConfig) -> Self {
        let (tx, rx) = mpsc::channel::<CaptureMsg>();
        let handle = thread::Builder::new()
            .name("padnav-capture".into())
            .spawn(move || {
                capture_loop(config, rx);
            })
            .expect("failed to spawn capture thread");
        debug!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "capture worker started"
        );

        Self {
            sender: tx,
            handle: Some(handle),
            config,
        }
    }

    /// The parameters the worker was started with.
    #[must_use]
    pub fn config(&self) -> CaptureConfig {
        self.config
    }

    /// Queue one chunk per channel for accumulation.
    ///
    /// Shape validation happens here, synchronously, so the audio callback
    /// learns about malformed chunks immediately.
    pub fn record(&self, chunk: Vec<Vec<f32>>) -> Result<(), CaptureError> {
        if chunk.len() != usize::from(self.config.channels) {
            return Err(CaptureError::ChannelCountMismatch {
                expected: self.config.channels,
                found: chunk.len(),
            });
        }
        let frames = chunk.first().map_or(0, Vec::len);
        for (channel, data) in chunk.iter().enumerate() {
            if data.len() != frames {
                return Err(CaptureError::UnevenChunk {
                    channel,
                    expected: frames,
                    found: data.len(),
                });
            }
        }
        self.send(CaptureMsg::Record(chunk))
    }

    /// Export everything recorded so far as a mono WAV file.
    pub fn export_wav(&self) -> Result<Vec<u8>, CaptureError> {
        let (reply, rx) = mpsc::channel();
        self.send(CaptureMsg::ExportWav { reply })?;
        rx.recv().map_err(|_| CaptureError::WorkerGone)
    }

    /// Take the merged per-channel buffers, leaving the worker's buffer
    /// intact.
    pub fn buffer(&self) -> Result<Vec<Vec<f32>>, CaptureError> {
        let (reply, rx) = mpsc::channel();
        self.send(CaptureMsg::TakeBuffer { reply })?;
        rx.recv().map_err(|_| CaptureError::WorkerGone)
    }

    /// Discard everything recorded so far.
    pub fn clear(&self) -> Result<(), CaptureError> {
        self.send(CaptureMsg::Clear)
    }

    /// Shut the worker down and wait for it to finish.
    pub fn shutdown(mut self) {
        let _ = self.sender.send(CaptureMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn send(&self, msg: CaptureMsg) -> Result<(), CaptureError> {
        self.sender.send(msg).map_err(|_| CaptureError::WorkerGone)
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        let _ = self.sender.send(CaptureMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn capture_loop(config: CaptureConfig, rx: mpsc::Receiver<CaptureMsg>) {
    let mut buffer = CaptureBuffer::new(config.channels);

    while let Ok(msg) = rx.recv() {
        match msg {
            CaptureMsg::Record(chunk) => {
                // Shape was validated on the caller side; a failure here
                // means the handle and worker disagree on the config.
                if let Err(err) = buffer.record(&chunk) {
                    warn!(%err, "capture chunk dropped");
                }
            }
            CaptureMsg::ExportWav { reply } => {
                let _ = reply.send(buffer.export_mono_wav(config.sample_rate));
            }
            CaptureMsg::TakeBuffer { reply } => {
                let merged = (0..usize::from(buffer.channels()))
                    .filter_map(|c| buffer.merged(c))
                    .collect();
                let _ = reply.send(merged);
            }
            CaptureMsg::Clear => buffer.clear(),
            CaptureMsg::Shutdown => break,
        }
    }
    debug!("capture worker stopped");
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::HEADER_LEN;

    fn mono_worker() -> CaptureWorker {
        CaptureWorker::start(CaptureConfig {
            sample_rate: 16_000,
            channels: 1,
        })
    }

    #[test]
    fn record_then_export_round_trips() {
        let worker = mono_worker();
        worker.record(vec![vec![0.0, 1.0]]).unwrap();
        worker.record(vec![vec![-1.0]]).unwrap();

        let wav = worker.export_wav().unwrap();
        assert_eq!(wav.len(), HEADER_LEN + 6);

        worker.shutdown();
    }

    #[test]
    fn clear_resets_the_buffer() {
        let worker = mono_worker();
        worker.record(vec![vec![0.5; 32]]).unwrap();
        worker.clear().unwrap();

        let wav = worker.export_wav().unwrap();
        assert_eq!(wav.len(), HEADER_LEN);

        worker.shutdown();
    }

    #[test]
    fn buffer_returns_merged_channels_without_draining() {
        let worker = CaptureWorker::start(CaptureConfig {
            sample_rate: 8_000,
            channels: 2,
        });
        worker.record(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();

        let channels = worker.buffer().unwrap();
        assert_eq!(channels, vec![vec![0.1, 0.2], vec![0.3, 0.4]]);

        // The export still sees the data.
        let wav = worker.export_wav().unwrap();
        assert_eq!(wav.len(), HEADER_LEN + 4);

        worker.shutdown();
    }

    #[test]
    fn malformed_chunks_fail_before_reaching_the_thread() {
        let worker = mono_worker();
        let err = worker.record(vec![vec![0.0], vec![0.0]]).unwrap_err();
        assert_eq!(
            err,
            CaptureError::ChannelCountMismatch {
                expected: 1,
                found: 2
            }
        );
        worker.shutdown();
    }

    #[test]
    fn drop_joins_the_thread() {
        let worker = mono_worker();
        worker.record(vec![vec![0.0; 8]]).unwrap();
        drop(worker);
    }
}
