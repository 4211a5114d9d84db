//! Platform abstraction layer
//!
//! Maps host key names to move intents. Everything else about input delivery
//! (event listeners, repeat rate) belongs to the host.

use crate::sim::MoveIntent;

/// Translate a key name (DOM `KeyboardEvent.key` style) into a move intent
pub fn key_to_intent(key: &str) -> Option<MoveIntent> {
    match key {
        "ArrowLeft" | "Left" | "a" | "A" => Some(MoveIntent::Left),
        "ArrowRight" | "Right" | "d" | "D" => Some(MoveIntent::Right),
        _ => None,
    }
}
