//! Input channels, mapped declaratively onto controller operations so the
//! wiring is testable without a window.

use crate::carousel::controller::Command;
use crate::carousel::layout;
use crate::constants::SWIPE_THRESHOLD;

/// Everything the frontend can feed the carousel, already stripped of
/// windowing details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PrevButton,
    NextButton,
    Dot(usize),
    /// Keyboard arrows are bound globally, not scoped to widget focus.
    ArrowLeft,
    ArrowRight,
    /// Pointer released after a drag; `dx` is the full horizontal travel.
    SwipeEnd { dx: f32 },
    HoverEnter,
    HoverLeave,
    PlayPauseToggle,
    Resize { width: i32 },
}

/// The channel-to-operation table. Swipes under the threshold are pointer
/// noise and map to nothing.
pub fn resolve(event: InputEvent) -> Option<Command> {
    match event {
        InputEvent::NextButton | InputEvent::ArrowRight => Some(Command::Next),
        InputEvent::PrevButton | InputEvent::ArrowLeft => Some(Command::Previous),
        InputEvent::Dot(index) => Some(Command::GoTo(index)),
        InputEvent::SwipeEnd { dx } if dx <= -SWIPE_THRESHOLD => Some(Command::Next),
        InputEvent::SwipeEnd { dx } if dx >= SWIPE_THRESHOLD => Some(Command::Previous),
        InputEvent::SwipeEnd { .. } => None,
        InputEvent::HoverEnter => Some(Command::HoverEnter),
        InputEvent::HoverLeave => Some(Command::HoverLeave),
        InputEvent::PlayPauseToggle => Some(Command::TogglePlayback),
        InputEvent::Resize { width } => {
            Some(Command::Reflow(layout::metrics_for_width(width).step()))
        }
    }
}

/// Tracks a press-drag-release gesture; only the horizontal travel matters.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
    }

    /// Release without a matching press yields nothing.
    pub fn end(&mut self, x: f32) -> Option<InputEvent> {
        self.origin.take().map(|origin| InputEvent::SwipeEnd { dx: x - origin })
    }
}

/// Edge-detects pointer presence over the carousel region.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn update(&mut self, inside_now: bool) -> Option<InputEvent> {
        match (self.inside, inside_now) {
            (false, true) => {
                self.inside = true;
                Some(InputEvent::HoverEnter)
            }
            (true, false) => {
                self.inside = false;
                Some(InputEvent::HoverLeave)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Up,
    Down,
    Left,
    Right,
    LetterB,
    LetterA,
    Other,
}

pub const KONAMI_SEQUENCE: [KeyPress; 10] = [
    KeyPress::Up,
    KeyPress::Up,
    KeyPress::Down,
    KeyPress::Down,
    KeyPress::Left,
    KeyPress::Right,
    KeyPress::Left,
    KeyPress::Right,
    KeyPress::LetterB,
    KeyPress::LetterA,
];

/// Watches the last ten key presses for the Konami sequence.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    history: Vec<KeyPress>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self { history: Vec::with_capacity(KONAMI_SEQUENCE.len()) }
    }

    /// Feed one key press; true when the tail of the history is exactly the
    /// sequence.
    pub fn press(&mut self, key: KeyPress) -> bool {
        self.history.push(key);
        let len = self.history.len();
        if len > KONAMI_SEQUENCE.len() {
            self.history.drain(..len - KONAMI_SEQUENCE.len());
        }
        self.history == KONAMI_SEQUENCE
    }
}
