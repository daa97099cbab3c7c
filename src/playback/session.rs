//! Live playback: drives an audio sink and a visual indicator in lockstep.
//!
//! A session walks the event stream from [`schedule_playback`]: each
//! `Signal` is shown on the indicator and its slice of the signal buffer is
//! handed to the audio sink, which resolves once the device has rendered
//! it. Pauses are timed waits on both. The indicator sees `Done` only after
//! the sink has drained.
//!
//! [`Player`] allows one session at a time. Starting another aborts the
//! running task and waits for it to wind down before the new one emits
//! anything, so a cancelled session can never report `Done` late.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::MorseConfig;
use crate::dsp::synth::synthesize;
use crate::error::Result;
use crate::token::MorseCode;

use super::events::{PlaybackEvent, schedule_playback};

// ── Collaborators ───────────────────────────────────────────

/// An audio output device.
pub trait AudioSink: Send + 'static {
    /// Render `chunk`. Resolves when the device has finished playing it.
    fn play(&mut self, chunk: &[f32], sample_rate: u32) -> impl Future<Output = Result<()>> + Send;

    /// Wait for any buffered audio to drain.
    fn finish(&mut self) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }
}

/// Anything that shows the blink state, such as a lamp or an LED.
pub trait VisualIndicator: Send + 'static {
    fn show(&mut self, event: &PlaybackEvent);
}

impl<F> VisualIndicator for F
where
    F: FnMut(&PlaybackEvent) + Send + 'static,
{
    fn show(&mut self, event: &PlaybackEvent) {
        self(event)
    }
}

/// A sink with no device behind it: it just waits out each chunk's
/// playing time. Useful headless and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSink;

impl AudioSink for ClockSink {
    async fn play(&mut self, chunk: &[f32], sample_rate: u32) -> Result<()> {
        let secs = chunk.len() as f64 / sample_rate as f64;
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
        Ok(())
    }
}

// ── Sessions ────────────────────────────────────────────────

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    Cancelled,
}

/// Caller's side of one playback session.
#[derive(Debug)]
pub struct Session {
    pub id: u64,
    outcome: oneshot::Receiver<Result<()>>,
}

impl Session {
    /// Wait for the session to end. A session superseded by a newer one
    /// reports `Cancelled`.
    pub async fn wait(self) -> Result<Completion> {
        match self.outcome.await {
            Ok(Ok(())) => Ok(Completion::Done),
            Ok(Err(e)) => Err(e),
            Err(_) => Ok(Completion::Cancelled),
        }
    }
}

struct ActiveSession {
    id: u64,
    task: JoinHandle<()>,
}

/// Owns the single active playback session.
#[derive(Default)]
pub struct Player {
    active: Option<ActiveSession>,
    next_id: u64,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `code`, cancelling whatever is playing now.
    ///
    /// Synthesis errors are returned here, before anything is cancelled.
    /// Device errors surface later through [`Session::wait`].
    pub async fn play<S, V>(
        &mut self,
        code: &MorseCode,
        config: &MorseConfig,
        sink: S,
        visual: V,
    ) -> Result<Session>
    where
        S: AudioSink,
        V: VisualIndicator,
    {
        let pcm = synthesize(code, config)?.to_f32();

        self.cancel().await;

        let id = self.next_id;
        self.next_id += 1;
        let (tx, rx) = oneshot::channel();
        let code = code.clone();
        let config = config.clone();

        info!(session = id, tokens = code.len(), samples = pcm.len(), "playback started");
        let task = tokio::spawn(async move {
            let result = run(id, &code, &config, &pcm, sink, visual).await;
            let _ = tx.send(result);
        });
        self.active = Some(ActiveSession { id, task });

        Ok(Session { id, outcome: rx })
    }

    /// Abort the active session, if any, and wait until it has stopped.
    pub async fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            if active.task.is_finished() {
                return;
            }
            active.task.abort();
            match active.task.await {
                Err(e) if e.is_cancelled() => debug!(session = active.id, "playback cancelled"),
                Err(e) => warn!(session = active.id, error = %e, "playback task failed"),
                Ok(()) => {}
            }
        }
    }

    /// Whether a session is still running.
    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|a| !a.task.is_finished())
    }
}

async fn run<S, V>(
    id: u64,
    code: &MorseCode,
    config: &MorseConfig,
    pcm: &[f32],
    mut sink: S,
    mut visual: V,
) -> Result<()>
where
    S: AudioSink,
    V: VisualIndicator,
{
    for event in schedule_playback(code, config)? {
        match &event {
            PlaybackEvent::Signal { samples, .. } => {
                visual.show(&event);
                let chunk = pcm.get(samples.clone()).unwrap_or(&[]);
                sink.play(chunk, config.sample_rate)
                    .await
                    .inspect_err(|e| warn!(session = id, error = %e, "audio device failed"))?;
            }
            PlaybackEvent::Pause { duration } => {
                visual.show(&event);
                tokio::time::sleep(*duration).await;
            }
            PlaybackEvent::Done => {
                sink.finish()
                    .await
                    .inspect_err(|e| warn!(session = id, error = %e, "audio device failed"))?;
                visual.show(&event);
            }
        }
    }
    info!(session = id, "playback done");
    Ok(())
}
