use tracing::debug;

use crate::carousel::state::Track;
use crate::carousel::timer::Countdown;
use crate::constants::COOLDOWN_AFTER_INTERACTION;
use crate::slide::Slide;

/// Operation requested by an input channel, resolved by the binding table in
/// `input::resolve`. Navigation commands are manual interactions and restart
/// autoplay after the cooldown; the hover pair bypasses the cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    HoverEnter,
    HoverLeave,
    TogglePlayback,
    Reflow(f32),
}

/// The carousel controller.
///
/// Owns the fixed slide deck, the current index, the strip position and the
/// two named cancellable timers (`autoplay`, `cooldown`). All navigation
/// wraps: there is no out-of-range error anywhere in here.
pub struct Carousel {
    deck: Vec<Slide>,
    current: usize,
    playing: bool,
    hovered: bool,
    interval: f32,
    autoplay: Countdown,
    cooldown: Countdown,
    track: Track,
}

impl Carousel {
    /// Returns None for an empty deck; the component is then disabled
    /// outright, mirroring a missing mount point.
    pub fn new(deck: Vec<Slide>, step: f32, interval: f32) -> Option<Self> {
        if deck.is_empty() {
            return None;
        }
        Some(Self {
            deck,
            current: 0,
            playing: false,
            hovered: false,
            interval,
            autoplay: Countdown::idle(),
            cooldown: Countdown::idle(),
            track: Track::new(step),
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.deck
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Slot index of the appended clone of the first slide.
    fn clone_slot(&self) -> usize {
        self.deck.len()
    }

    /// Navigate to `index`, wrapping any integer into range. Never fails.
    ///
    /// `next()` off the end rides the appended clone slot so the strip keeps
    /// moving forward; `previous()` off the front first re-points to the
    /// clone invisibly so the last slide slides in from the same side.
    pub fn go_to(&mut self, index: i64) {
        let count = self.deck.len() as i64;
        let wrapped = index.rem_euclid(count) as usize;

        // If the strip is still headed for (or resting on) the clone from an
        // earlier forward wrap, perform the silent correction now so the new
        // transition starts from a real slot.
        if self.track.target_slot() == self.clone_slot() && index != count {
            self.track.jump_to(0);
        }

        let slot = if index == count {
            self.clone_slot()
        } else if index == -1 {
            self.track.jump_to(self.clone_slot());
            wrapped
        } else {
            wrapped
        };

        debug!(from = self.current, to = wrapped, slot, "navigate");
        self.current = wrapped;
        self.track.slide_to(slot);
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    /// Idempotent: a second call while playing keeps the single pending
    /// deadline untouched.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        debug!("autoplay on");
        self.playing = true;
        self.autoplay.schedule(self.interval);
    }

    /// Idempotent: pausing while paused is a no-op.
    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        debug!("autoplay off");
        self.playing = false;
        self.autoplay.cancel();
    }

    /// Cooldown policy after a manual interaction: stop autoplay now, resume
    /// once `delay` passes without further interaction. Re-invoking merely
    /// reschedules the single cooldown deadline.
    pub fn restart_autoplay_after(&mut self, delay: f32) {
        self.pause();
        self.cooldown.schedule(delay);
    }

    /// Hover is a plain on/off switch for autoplay, independent of the
    /// cooldown used for discrete interactions.
    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.pause();
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.play();
    }

    /// Explicit user toggle. Overrides any pending cooldown either way.
    pub fn toggle_playback(&mut self) {
        self.cooldown.cancel();
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn reflow(&mut self, step: f32) {
        self.track.reflow(step);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => {
                self.next();
                self.restart_autoplay_after(COOLDOWN_AFTER_INTERACTION);
            }
            Command::Previous => {
                self.previous();
                self.restart_autoplay_after(COOLDOWN_AFTER_INTERACTION);
            }
            Command::GoTo(index) => {
                self.go_to(index as i64);
                self.restart_autoplay_after(COOLDOWN_AFTER_INTERACTION);
            }
            Command::HoverEnter => self.hover_enter(),
            Command::HoverLeave => self.hover_leave(),
            Command::TogglePlayback => self.toggle_playback(),
            Command::Reflow(step) => self.reflow(step),
        }
    }

    /// Advance timers and the strip animation by one frame.
    pub fn tick(&mut self, dt: f32) {
        if self.autoplay.tick(dt) {
            self.next();
            self.autoplay.schedule(self.interval);
        }
        if self.cooldown.tick(dt) && !self.hovered {
            // Pointer still inside keeps autoplay off; the eventual
            // hover-leave resumes it instead.
            self.play();
        }
        if self.track.tick(dt) && self.track.target_slot() == self.clone_slot() {
            // The transition ended on the clone of the first slide: re-point
            // to the real one without animating.
            self.track.jump_to(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AUTOPLAY_INTERVAL, TRANSITION_DURATION};
    use crate::slide::builtin_deck;

    const STEP: f32 = 100.0;

    fn carousel() -> Carousel {
        Carousel::new(builtin_deck(), STEP, AUTOPLAY_INTERVAL).expect("deck is nonempty")
    }

    fn settle(c: &mut Carousel) {
        c.tick(TRANSITION_DURATION + 0.01);
    }

    #[test]
    fn empty_deck_disables_the_component() {
        assert!(Carousel::new(Vec::new(), STEP, AUTOPLAY_INTERVAL).is_none());
    }

    #[test]
    fn next_advances_and_wraps_over_five_slides() {
        let mut c = carousel();
        let mut seen = Vec::new();
        for _ in 0..4 {
            c.next();
            settle(&mut c);
            seen.push(c.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
        c.next();
        settle(&mut c);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn repeated_next_matches_modular_arithmetic() {
        let mut c = carousel();
        c.go_to(2);
        settle(&mut c);
        for _ in 0..13 {
            c.next();
            settle(&mut c);
        }
        assert_eq!(c.current(), (2 + 13) % 5);
    }

    #[test]
    fn previous_is_the_inverse_of_next_including_the_wrap_boundary() {
        for start in 0..5i64 {
            let mut c = carousel();
            c.go_to(start);
            settle(&mut c);
            c.next();
            settle(&mut c);
            c.previous();
            settle(&mut c);
            assert_eq!(c.current() as i64, start);
        }
    }

    #[test]
    fn go_to_wraps_any_integer_into_range() {
        let mut c = carousel();
        for index in [-7i64, -1, 0, 3, 5, 12, 100] {
            c.go_to(index);
            assert!(c.current() < c.slide_count());
            assert_eq!(c.current() as i64, index.rem_euclid(5));
            settle(&mut c);
        }
    }

    #[test]
    fn forward_wrap_rides_the_clone_then_snaps_back_silently() {
        let mut c = carousel();
        c.go_to(4);
        settle(&mut c);
        c.next();
        assert_eq!(c.current(), 0);
        assert_eq!(c.track().target_slot(), 5);
        settle(&mut c);
        assert_eq!(c.track().target_slot(), 0);
        assert_eq!(c.track().offset(), 0.0);
        assert!(!c.track().is_sliding());
    }

    #[test]
    fn backward_wrap_enters_from_the_clone_side() {
        let mut c = carousel();
        c.previous();
        assert_eq!(c.current(), 4);
        settle(&mut c);
        assert_eq!(c.track().offset(), 4.0 * STEP);
        assert!(!c.track().is_sliding());
    }

    #[test]
    fn play_twice_keeps_a_single_pending_deadline() {
        let mut c = carousel();
        c.play();
        c.play();
        assert!(c.is_playing());
        c.tick(AUTOPLAY_INTERVAL);
        settle(&mut c);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn pause_when_paused_is_a_noop() {
        let mut c = carousel();
        c.pause();
        c.pause();
        assert!(!c.is_playing());
        c.tick(AUTOPLAY_INTERVAL * 3.0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn autoplay_advances_and_reschedules() {
        let mut c = carousel();
        c.play();
        c.tick(AUTOPLAY_INTERVAL);
        settle(&mut c);
        assert_eq!(c.current(), 1);
        assert!(c.is_playing());
        c.tick(AUTOPLAY_INTERVAL);
        settle(&mut c);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn manual_interaction_pauses_then_resumes_after_the_cooldown() {
        let mut c = carousel();
        c.play();
        c.apply(Command::Next);
        assert!(!c.is_playing());
        c.tick(1.9);
        assert!(!c.is_playing());
        c.tick(0.2);
        assert!(c.is_playing());
    }

    #[test]
    fn a_second_interaction_reschedules_the_cooldown_instead_of_stacking() {
        let mut c = carousel();
        c.play();
        c.apply(Command::Next);
        c.tick(1.5);
        c.apply(Command::Previous); // cooldown restarts here
        c.tick(1.9);
        assert!(!c.is_playing());
        c.tick(0.2);
        assert!(c.is_playing());
    }

    #[test]
    fn cooldown_expiry_while_hovered_does_not_resume() {
        let mut c = carousel();
        c.play();
        c.apply(Command::Next);
        c.apply(Command::HoverEnter);
        c.tick(3.0);
        assert!(!c.is_playing());
        c.apply(Command::HoverLeave);
        assert!(c.is_playing());
    }

    #[test]
    fn hover_enter_then_leave_resumes_with_a_single_timer() {
        let mut c = carousel();
        c.play();
        c.apply(Command::HoverEnter);
        assert!(!c.is_playing());
        c.apply(Command::HoverLeave);
        assert!(c.is_playing());
        // Exactly one deadline: one interval elapses, one advance happens.
        c.tick(AUTOPLAY_INTERVAL);
        settle(&mut c);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn toggle_overrides_a_pending_cooldown() {
        let mut c = carousel();
        c.play();
        c.apply(Command::Next);
        c.apply(Command::TogglePlayback); // user says play, right now
        assert!(c.is_playing());
        c.apply(Command::TogglePlayback);
        assert!(!c.is_playing());
        c.tick(10.0); // no stale cooldown sneaks autoplay back on
        assert!(!c.is_playing());
    }

    #[test]
    fn rapid_repeat_navigation_stays_in_range_and_retargets() {
        let mut c = carousel();
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current(), 3);
        assert!(c.track().is_sliding());
        settle(&mut c);
        assert_eq!(c.track().offset(), 3.0 * STEP);
    }

    #[test]
    fn reflow_mid_transition_recenters_without_animating() {
        let mut c = carousel();
        c.next();
        c.tick(0.1);
        c.apply(Command::Reflow(250.0));
        assert_eq!(c.track().offset(), 250.0);
        assert!(!c.track().is_sliding());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn single_slide_deck_wraps_onto_itself() {
        let deck = vec![builtin_deck()[0]];
        let mut c = Carousel::new(deck, STEP, AUTOPLAY_INTERVAL).expect("one slide");
        c.next();
        assert_eq!(c.current(), 0);
        settle(&mut c);
        assert_eq!(c.track().target_slot(), 0);
        c.previous();
        settle(&mut c);
        assert_eq!(c.current(), 0);
    }
}
