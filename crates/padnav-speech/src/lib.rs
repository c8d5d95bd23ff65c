#![forbid(unsafe_code)]

//! Speech capture: sample accumulation and WAV encoding.
//!
//! # Role in padnav
//! `padnav-speech` is the capture half of the voice-input path: the host's
//! audio callback feeds float chunks in, and the crate hands back a WAV
//! file (RIFF / PCM16) for the speech backend. It neither opens audio
//! devices nor plays anything back — both belong to the host.
//!
//! # Primary responsibilities
//! - **wav**: clamped float→PCM16 conversion, channel interleaving, and
//!   header encoding.
//! - **CaptureBuffer**: validated per-channel chunk accumulation.
//! - **CaptureWorker**: an owned thread keeping accumulation and encoding
//!   off the audio callback, driven by a small command protocol.

pub mod capture;
pub mod error;
pub mod wav;
pub mod worker;

pub use capture::CaptureBuffer;
pub use error::CaptureError;
pub use worker::{CaptureConfig, CaptureWorker};
