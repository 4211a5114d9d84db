//! Frame driver
//!
//! Called once per display refresh with the host's timestamp. Each frame feeds
//! the elapsed wall-clock time to the session's scheduler (spawns, countdown),
//! runs one simulation tick, routes events to the audio and notification
//! collaborators, and renders a snapshot. Once the session leaves Active the
//! clock stops driving it.

use crate::audio::{AudioSink, SoundEffect};
use crate::renderer::Renderer;
use crate::sim::{GameEvent, Session, SessionSummary};
use crate::ui::Notifier;

/// External collaborators fed by the clock
pub struct Collaborators<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioSink,
    pub notifier: &'a mut dyn Notifier,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame
    Running,
    /// This frame ended the session
    Finished(SessionSummary),
    /// Session was not active; nothing ran
    Stopped,
}

#[derive(Debug, Clone, Default)]
pub struct GameClock {
    last_time_ms: Option<f64>,
    /// Sub-millisecond remainder carried between frames
    carry_ms: f64,
    frames: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp so the next active frame starts at dt = 0
    fn rewind(&mut self) {
        self.last_time_ms = None;
        self.carry_ms = 0.0;
    }

    /// Frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one simulation + render pass at host time `time_ms`
    pub fn frame(
        &mut self,
        session: &mut Session,
        time_ms: f64,
        hooks: &mut Collaborators<'_>,
    ) -> FrameStatus {
        if !session.is_active() {
            // Time spent outside Active never reaches the next session's timers
            self.rewind();
            return FrameStatus::Stopped;
        }
        if !time_ms.is_finite() {
            log::warn!("Ignoring non-finite frame timestamp {}", time_ms);
            return FrameStatus::Running;
        }

        let dt = match self.last_time_ms {
            Some(last) => (time_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        self.carry_ms += dt;
        let whole_ms = self.carry_ms.floor();
        self.carry_ms -= whole_ms;

        let timer_events = session.advance_time(whole_ms as u64);
        dispatch(&timer_events, hooks);

        let report = session.tick();
        dispatch(&report.events, hooks);

        hooks.renderer.render(&session.snapshot());
        self.frames += 1;

        match session.summary() {
            Some(summary) => {
                log::info!(
                    "Session finished after {} frames: {:?}",
                    self.frames,
                    summary
                );
                FrameStatus::Finished(summary)
            }
            None => FrameStatus::Running,
        }
    }
}

fn dispatch(events: &[GameEvent], hooks: &mut Collaborators<'_>) {
    for event in events {
        match event {
            GameEvent::Collected { .. } => hooks.audio.play(SoundEffect::Collect),
            GameEvent::Milestone { message, .. } => hooks.notifier.milestone(message),
            _ => {}
        }
    }
}
