use crate::constants::TRANSITION_DURATION;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TrackMotion {
    Resting, // Offset sits exactly on the target slot
    Sliding, // Easing toward the target slot
}

/// Position of the rendered strip.
///
/// Slots run `0..=slide_count`: slot `slide_count` holds the appended clone
/// of the first slide used for the seamless forward wrap. The controller is
/// responsible for never resting on the clone longer than one transition.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    step: f32, // Pixels advanced per slot, from the breakpoint table
    offset: f32,
    from: f32,
    target_slot: usize,
    elapsed: f32,
    motion: TrackMotion,
}

impl Track {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            offset: 0.0,
            from: 0.0,
            target_slot: 0,
            elapsed: 0.0,
            motion: TrackMotion::Resting,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn target_slot(&self) -> usize {
        self.target_slot
    }

    pub fn is_sliding(&self) -> bool {
        self.motion == TrackMotion::Sliding
    }

    /// Begin an eased transition toward `slot`, starting from wherever the
    /// strip currently sits (so retargeting mid-flight stays smooth).
    pub fn slide_to(&mut self, slot: usize) {
        self.from = self.offset;
        self.target_slot = slot;
        self.elapsed = 0.0;
        self.motion = TrackMotion::Sliding;
    }

    /// Re-point the strip at `slot` instantly, without animating.
    pub fn jump_to(&mut self, slot: usize) {
        self.target_slot = slot;
        self.offset = slot as f32 * self.step;
        self.motion = TrackMotion::Resting;
    }

    /// Install a new step distance and reassert the current slot at that
    /// scale. An in-flight transition completes on the spot.
    pub fn reflow(&mut self, step: f32) {
        self.step = step;
        self.jump_to(self.target_slot);
    }

    /// Advance the easing. Returns true on the tick where a transition
    /// completes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.motion != TrackMotion::Sliding {
            return false;
        }
        self.elapsed += dt;
        let t = (self.elapsed / TRANSITION_DURATION).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        let target = self.target_slot as f32 * self.step;
        self.offset = self.from + (target - self.from) * eased;
        if t >= 1.0 {
            self.offset = target;
            self.motion = TrackMotion::Resting;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_eases_to_the_target_and_completes_once() {
        let mut track = Track::new(100.0);
        track.slide_to(2);
        assert!(track.is_sliding());
        assert!(!track.tick(TRANSITION_DURATION / 2.0));
        assert!(track.offset() > 0.0 && track.offset() < 200.0);
        assert!(track.tick(TRANSITION_DURATION));
        assert_eq!(track.offset(), 200.0);
        assert!(!track.is_sliding());
        assert!(!track.tick(1.0));
    }

    #[test]
    fn jump_is_instant_and_kills_any_animation() {
        let mut track = Track::new(100.0);
        track.slide_to(3);
        track.tick(0.1);
        track.jump_to(1);
        assert_eq!(track.offset(), 100.0);
        assert!(!track.is_sliding());
    }

    #[test]
    fn reflow_reasserts_the_target_slot_at_the_new_scale() {
        let mut track = Track::new(100.0);
        track.slide_to(2);
        track.tick(0.1); // mid-flight
        track.reflow(250.0);
        assert_eq!(track.offset(), 500.0);
        assert!(!track.is_sliding());
    }

    #[test]
    fn retarget_mid_flight_starts_from_the_current_offset() {
        let mut track = Track::new(100.0);
        track.slide_to(2);
        track.tick(0.1);
        let mid = track.offset();
        track.slide_to(0);
        track.tick(0.01);
        assert!(track.offset() < mid);
    }
}
