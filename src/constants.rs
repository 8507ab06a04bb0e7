pub const WINDOW_WIDTH: i32 = 1280;              // Initial window size
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;                         // Frames per second

pub const AUTOPLAY_INTERVAL: f32 = 3.5;          // Seconds between automatic advances
pub const COOLDOWN_AFTER_INTERACTION: f32 = 2.0; // Autoplay holdoff after manual navigation (seconds)
pub const TRANSITION_DURATION: f32 = 0.45;       // Slide transition animation (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;           // Minimum horizontal drag to count as a swipe (pixels)

pub const RAINBOW_DURATION: f32 = 5.0;           // How long the easter-egg border stays up (seconds)
