//! Playback scheduling.
//!
//! Two layers:
//!
//! - [`Playback`] is a clock-free cursor over a trace. Each [`Playback::tick`]
//!   applies at most one step to the visual state. It is fully
//!   deterministic and is what tests drive directly.
//! - [`Visualizer`] drives a `Playback` from a timer worker thread. The
//!   worker waits on a bounded control channel with `recv_timeout(interval)`
//!   and ticks on every timeout, so a stop message ends the wait early.
//!
//! ```text
//! Idle ──start──▶ Running ──end of trace──▶ Completed
//!                    │
//!                    └──────stop──────────▶ Cancelled
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use algoscope_kernel::model::{Step, Trace};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::audio::AudioSink;
use crate::error::PlaybackError;
use crate::visual::{Frame, VisualState};

/// Lifecycle of one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    /// Every step was applied.
    Completed,
    /// Stopped before the end.
    Cancelled,
}

/// Result of one [`Playback::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The step at this index was applied.
    Applied(usize),
    /// The cursor was already at the end; playback is now complete.
    Completed,
    /// Playback is not running; nothing happened.
    Idle,
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// Deterministic cursor over a finished trace.
#[derive(Debug)]
pub struct Playback<S> {
    trace: Trace<S>,
    cursor: usize,
    state: PlaybackState,
    visual: VisualState<S>,
}

impl<S: Frame> Playback<S> {
    #[must_use]
    pub fn new(trace: Trace<S>) -> Self {
        Self {
            trace,
            cursor: 0,
            state: PlaybackState::Idle,
            visual: VisualState::new(),
        }
    }

    /// `Idle → Running`. No effect in any other state.
    pub fn start(&mut self) {
        if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Running;
        }
    }

    /// `Running → Cancelled`. No effect in any other state.
    pub fn cancel(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Cancelled;
        }
    }

    /// Apply the next step, or complete if none remain.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != PlaybackState::Running {
            return TickOutcome::Idle;
        }
        let Some(step) = self.trace.get(self.cursor) else {
            self.state = PlaybackState::Completed;
            return TickOutcome::Completed;
        };
        self.visual.apply(step);
        let applied = self.cursor;
        self.cursor += 1;
        TickOutcome::Applied(applied)
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the next step to apply.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    #[must_use]
    pub fn visual(&self) -> &VisualState<S> {
        &self.visual
    }
}

// ---------------------------------------------------------------------------
// Threaded scheduler
// ---------------------------------------------------------------------------

/// Messages sent to the timer worker.
enum Control {
    Stop,
}

fn lock<S>(playback: &Mutex<Playback<S>>) -> MutexGuard<'_, Playback<S>> {
    playback.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Control handle for a running playback. Cheap to clone.
pub struct PlaybackHandle<S> {
    running: Arc<AtomicBool>,
    control: Sender<Control>,
    playback: Arc<Mutex<Playback<S>>>,
    audio: Arc<dyn AudioSink>,
}

impl<S> Clone for PlaybackHandle<S> {
    fn clone(&self) -> Self {
        Self {
            running: Arc::clone(&self.running),
            control: self.control.clone(),
            playback: Arc::clone(&self.playback),
            audio: Arc::clone(&self.audio),
        }
    }
}

impl<S: Frame> PlaybackHandle<S> {
    /// Stop playback before its next tick and suspend audio.
    ///
    /// Idempotent. A tick already in progress finishes first; callbacks may
    /// call `stop` on their own handle.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            // A full channel already holds a stop.
            let _ = self.control.try_send(Control::Stop);
            tracing::info!("playback stop requested");
        }
        if let Err(e) = self.audio.suspend() {
            tracing::debug!(error = %e, "audio suspend failed");
        }
    }

    /// `true` until the playback completes or is stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        lock(&self.playback).state()
    }

    /// Copy of the current visual state.
    #[must_use]
    pub fn visual(&self) -> VisualState<S> {
        lock(&self.playback).visual().clone()
    }

    /// Number of steps applied so far.
    #[must_use]
    pub fn applied(&self) -> usize {
        lock(&self.playback).cursor()
    }
}

struct Active<S> {
    handle: PlaybackHandle<S>,
    worker: JoinHandle<()>,
}

/// Owns at most one playback at a time.
///
/// Starting a new playback stops the previous one and joins its worker, so
/// tick loops never overlap. Dropping the visualizer stops playback.
pub struct Visualizer<S: Frame> {
    audio: Arc<dyn AudioSink>,
    active: Option<Active<S>>,
}

impl<S: Frame> Visualizer<S> {
    #[must_use]
    pub fn new(audio: Arc<dyn AudioSink>) -> Self {
        Self { audio, active: None }
    }

    /// Play `trace`, one step every `interval`.
    ///
    /// `on_step` runs after each applied step with the updated visual state.
    /// `on_done` runs once if the playback reaches the end; it is not called
    /// for a stopped playback.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::Spawn`] if the worker thread cannot be created.
    pub fn start<F, D>(
        &mut self,
        trace: Trace<S>,
        interval: Duration,
        on_step: F,
        on_done: D,
    ) -> Result<PlaybackHandle<S>, PlaybackError>
    where
        F: FnMut(&Step<S>, &VisualState<S>) + Send + 'static,
        D: FnOnce() + Send + 'static,
    {
        self.stop();

        let algorithm = trace.algorithm();
        let steps = trace.len();
        let mut playback = Playback::new(trace);
        playback.start();

        let (control, inbox) = bounded::<Control>(1);
        let handle = PlaybackHandle {
            running: Arc::new(AtomicBool::new(true)),
            control,
            playback: Arc::new(Mutex::new(playback)),
            audio: Arc::clone(&self.audio),
        };
        if let Err(e) = self.audio.resume() {
            tracing::debug!(error = %e, "audio resume failed");
        }

        let worker_handle = handle.clone();
        let worker = thread::Builder::new()
            .name(format!("algoscope-playback-{algorithm}"))
            .spawn(move || run_worker(&worker_handle, &inbox, interval, on_step, on_done))
            .map_err(PlaybackError::Spawn)?;

        tracing::info!(algorithm, steps, interval = ?interval, "playback started");
        self.active = Some(Active {
            handle: handle.clone(),
            worker,
        });
        Ok(handle)
    }

    /// Stop the current playback, if any, and wait for its worker.
    /// Idempotent.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.stop();
            if active.worker.join().is_err() {
                tracing::debug!("playback worker panicked");
            }
        }
    }

    /// Block until the current playback completes or is stopped elsewhere.
    pub fn wait(&mut self) {
        if let Some(active) = self.active.take() {
            if active.worker.join().is_err() {
                tracing::debug!("playback worker panicked");
            }
        }
    }

    /// Handle of the current playback, if one was started and not stopped.
    #[must_use]
    pub fn handle(&self) -> Option<&PlaybackHandle<S>> {
        self.active.as_ref().map(|a| &a.handle)
    }
}

impl<S: Frame> Drop for Visualizer<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker<S, F, D>(
    handle: &PlaybackHandle<S>,
    inbox: &Receiver<Control>,
    interval: Duration,
    mut on_step: F,
    on_done: D,
) where
    S: Frame,
    F: FnMut(&Step<S>, &VisualState<S>),
    D: FnOnce(),
{
    loop {
        match inbox.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
        let mut playback = lock(&handle.playback);
        if !handle.running.load(Ordering::SeqCst) {
            break;
        }
        match playback.tick() {
            TickOutcome::Applied(index) => {
                let Some(step) = playback.trace().get(index) else {
                    break;
                };
                let step = step.clone();
                let visual = playback.visual().clone();
                drop(playback);
                on_step(&step, &visual);
                if let Some(tone) = S::tone(&step) {
                    if let Err(e) = handle.audio.play_tone(tone.hz, tone.seconds) {
                        tracing::debug!(error = %e, hz = tone.hz, "tone dropped");
                    }
                }
            }
            TickOutcome::Completed => {
                drop(playback);
                handle.running.store(false, Ordering::SeqCst);
                tracing::info!("playback completed");
                on_done();
                return;
            }
            TickOutcome::Idle => return,
        }
    }
    lock(&handle.playback).cancel();
    tracing::info!("playback cancelled");
}
