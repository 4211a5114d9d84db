//! Milestone notifications
//!
//! The simulation says *what* to announce; how long a toast stays up and how
//! it fades is decided here.

use crate::consts::NOTIFICATION_MS;

/// Receives milestone announcements
pub trait Notifier {
    fn milestone(&mut self, message: &str);
}

/// Fade-out window at the end of a toast's life
const FADE_MS: u64 = 400;

/// A transient on-screen message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub remaining_ms: u64,
}

impl Toast {
    /// Opacity (0-1): fully visible until the last `FADE_MS`
    pub fn alpha(&self) -> f32 {
        if self.remaining_ms >= FADE_MS {
            1.0
        } else {
            self.remaining_ms as f32 / FADE_MS as f32
        }
    }
}

/// Queue of visible toasts, newest last
#[derive(Debug, Clone)]
pub struct ToastQueue {
    duration_ms: u64,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_MS)
    }
}

impl ToastQueue {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            toasts: Vec::new(),
        }
    }

    /// Age every toast, dropping expired ones
    pub fn update(&mut self, dt_ms: u64) {
        for toast in &mut self.toasts {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(dt_ms);
        }
        self.toasts.retain(|t| t.remaining_ms > 0);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Notifier for ToastQueue {
    fn milestone(&mut self, message: &str) {
        log::info!("Milestone: {}", message);
        self.toasts.push(Toast {
            message: message.to_string(),
            remaining_ms: self.duration_ms,
        });
    }
}
