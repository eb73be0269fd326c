//! Pointer capture and movement vector derivation.

use crate::game::LocalPlayer;

/// Converts a pointer position into a movement vector whose direction matches
/// the angle from the surface center to the pointer.
///
/// The magnitude is scaled piecewise-linearly per angular quadrant rather
/// than normalized to a unit circle. The server's movement model is tuned to
/// this exact ramp, so it is reproduced bit-for-bit rather than corrected.
pub fn movement_vector(pointer: (f32, f32), center: (f32, f32)) -> (f32, f32) {
    let angle = (pointer.1 - center.1)
        .atan2(pointer.0 - center.0)
        .to_degrees();

    if (0.0..90.0).contains(&angle) {
        (1.0 - angle / 90.0, -(angle / 90.0))
    } else if (90.0..=180.0).contains(&angle) {
        (-(angle - 90.0) / 90.0, -(1.0 - (angle - 90.0) / 90.0))
    } else if (-180.0..-90.0).contains(&angle) {
        ((angle + 90.0) / 90.0, 1.0 + (angle + 90.0) / 90.0)
    } else {
        // [-90, 0)
        ((angle + 90.0) / 90.0, 1.0 - (angle + 90.0) / 90.0)
    }
}

/// Samples the pointer once per frame and writes the derived vector straight
/// onto the local player record, last write wins. Change detection stands in
/// for event-driven pointer callbacks: the vector stays undefined until the
/// pointer actually moves. No throttling happens here; transmission cadence
/// belongs to the sync client's tick timer.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pointer: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker { last_pointer: None }
    }

    pub fn sample(&mut self, pointer: (f32, f32), center: (f32, f32), local: &mut LocalPlayer) {
        let moved = match self.last_pointer {
            Some(previous) => previous != pointer,
            // First sample only establishes the baseline position.
            None => false,
        };
        self.last_pointer = Some(pointer);

        if moved {
            local.vector = Some(movement_vector(pointer, center));
        }
    }
}
