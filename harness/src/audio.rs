//! Audio mapping and the injected audio capability.
//!
//! The harness never synthesizes sound. It maps steps to a [`Tone`] and
//! hands the tone to whatever [`AudioSink`] the host injected. Values and
//! grid positions share one curve: clamp, normalize to `[0, 1]`, square-root
//! ease, then scale onto `[MIN_HZ, MAX_HZ]`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::AudioError;

/// Lowest tone frequency.
pub const MIN_HZ: u32 = 110;
/// Highest tone frequency.
pub const MAX_HZ: u32 = 660;
/// Smallest value with a distinct pitch.
pub const MIN_VALUE: i64 = 5;
/// Largest value with a distinct pitch.
pub const MAX_VALUE: i64 = 105;
/// Tone length for sort and search steps.
pub const ARRAY_TONE_SECONDS: f64 = 0.12;
/// Tone length for pathfinding steps.
pub const GRID_TONE_SECONDS: f64 = 0.08;

/// One tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub hz: u32,
    pub seconds: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ease(t: f64) -> u32 {
    let span = f64::from(MAX_HZ - MIN_HZ);
    (f64::from(MIN_HZ) + t.clamp(0.0, 1.0).sqrt() * span).round() as u32
}

/// Pitch for an element value.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn frequency_for_value(value: i64) -> u32 {
    let v = value.clamp(MIN_VALUE, MAX_VALUE);
    ease((v - MIN_VALUE) as f64 / (MAX_VALUE - MIN_VALUE) as f64)
}

/// Pitch for a grid cell: its row-major index over the cell count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn frequency_for_cell(row: usize, col: usize, rows: usize, cols: usize) -> u32 {
    let cells = rows * cols;
    if cells == 0 {
        return MIN_HZ;
    }
    ease((row * cols + col) as f64 / cells as f64)
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A host-provided tone player.
///
/// Created lazily by the host and shared with the scheduler. The scheduler
/// resumes it when playback starts and suspends it on stop; it never tears
/// the sink down.
pub trait AudioSink: Send + Sync {
    /// Play one tone. Must not block for the tone's duration.
    ///
    /// # Errors
    ///
    /// [`AudioError`] if the backend is unavailable or refuses the tone.
    fn play_tone(&self, hz: u32, seconds: f64) -> Result<(), AudioError>;

    /// Resume a suspended backend.
    ///
    /// # Errors
    ///
    /// [`AudioError`] if the backend cannot resume.
    fn resume(&self) -> Result<(), AudioError> {
        Ok(())
    }

    /// Suspend the backend without releasing it.
    ///
    /// # Errors
    ///
    /// [`AudioError`] if the backend cannot suspend.
    fn suspend(&self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_tone(&self, _hz: u32, _seconds: f64) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Records every request instead of playing it. Headless hosts use it to
/// inspect what a visualization would have sounded like.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    tones: Mutex<Vec<Tone>>,
    resumes: AtomicUsize,
    suspends: AtomicUsize,
    failing: bool,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `play_tone` records and then reports
    /// [`AudioError::Unavailable`].
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Tones requested so far.
    #[must_use]
    pub fn tones(&self) -> Vec<Tone> {
        self.tones
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn resumes(&self) -> usize {
        self.resumes.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn suspends(&self) -> usize {
        self.suspends.load(Ordering::SeqCst)
    }
}

impl AudioSink for RecordingAudio {
    fn play_tone(&self, hz: u32, seconds: f64) -> Result<(), AudioError> {
        self.tones
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Tone { hz, seconds });
        if self.failing {
            return Err(AudioError::Unavailable {
                detail: "recording sink configured to fail".into(),
            });
        }
        Ok(())
    }

    fn resume(&self) -> Result<(), AudioError> {
        self.resumes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn suspend(&self) -> Result<(), AudioError> {
        self.suspends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
