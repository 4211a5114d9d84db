//! Audio collaborator
//!
//! The simulation only emits fire-and-forget cues; playback belongs to the host.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Clean water caught
    Collect,
}

/// Anything that can play a cue. No acknowledgment is expected.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for hosts without an audio device: logs cues instead
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl AudioManager {
    pub fn new(master_volume: f32) -> Self {
        Self {
            master_volume: master_volume.clamp(0.0, 1.0),
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted || self.master_volume == 0.0
    }

    /// Cues actually played (muted cues don't count)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        if self.is_muted() {
            return;
        }
        self.played += 1;
        log::trace!("Playing {:?} at volume {:.2}", effect, self.master_volume);
    }
}
