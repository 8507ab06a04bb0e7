use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod carousel;
mod constants;
mod slide;
mod texture_loader;
mod theme;
mod ui;

use crate::carousel::input::{self, HoverTracker, InputEvent, KeyPress, KonamiTracker, SwipeTracker};
use crate::carousel::layout::{carousel_region, metrics_for_width};
use crate::carousel::timer::Countdown;
use crate::carousel::Carousel;
use crate::constants::*;
use crate::slide::builtin_deck;
use crate::texture_loader::{Artwork, load_artwork};
use crate::theme::{Palette, Theme};

#[derive(Parser, Debug)]
#[command(name = "showcase", about = "Portfolio project carousel")]
struct Args {
    /// Directory containing slide artwork
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Seconds between automatic advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    interval: f32,

    /// Start with autoplay off
    #[arg(long)]
    paused: bool,

    /// Override the stored theme preference
    #[arg(long, value_enum)]
    theme: Option<Theme>,
}

fn key_press(key: KeyboardKey) -> KeyPress {
    match key {
        KeyboardKey::KEY_UP => KeyPress::Up,
        KeyboardKey::KEY_DOWN => KeyPress::Down,
        KeyboardKey::KEY_LEFT => KeyPress::Left,
        KeyboardKey::KEY_RIGHT => KeyPress::Right,
        KeyboardKey::KEY_B => KeyPress::LetterB,
        KeyboardKey::KEY_A => KeyPress::LetterA,
        _ => KeyPress::Other,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Theme Preference ---
    let preference_path = theme::preference_path();
    let mut current_theme = match args.theme {
        Some(overridden) => {
            if let Some(path) = &preference_path {
                if let Err(e) = theme::store(path, overridden) {
                    warn!(error = %e, "failed to persist theme preference");
                }
            }
            overridden
        }
        None => preference_path
            .as_deref()
            .map(theme::load)
            .unwrap_or(Theme::Light),
    };
    let mut palette = Palette::for_theme(current_theme);

    let interval = if args.interval < 0.5 {
        warn!(requested = args.interval, "autoplay interval too short, using default");
        AUTOPLAY_INTERVAL
    } else {
        args.interval
    };

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Slide Deck & Artwork ---
    let deck = builtin_deck();
    let artwork: Vec<Artwork> = deck
        .iter()
        .map(|slide| load_artwork(&mut rl, &thread, &args.assets, slide))
        .collect();

    let mut screen_width = rl.get_screen_width();
    let mut screen_height = rl.get_screen_height();
    let mut region = carousel_region(screen_width, screen_height);
    let mut metrics = metrics_for_width(screen_width);

    let mut carousel = match region {
        Some(_) => Carousel::new(deck, metrics.step(), interval),
        None => None,
    };
    match carousel.as_mut() {
        Some(c) => {
            if !args.paused {
                c.play();
            }
            info!(slides = c.slide_count(), theme = current_theme.as_str(), "carousel mounted");
        }
        None => warn!("no usable mount region, carousel disabled"),
    }

    // --- Input Trackers ---
    let mut swipe = SwipeTracker::default();
    let mut hover = HoverTracker::default();
    let mut konami = KonamiTracker::new();
    let mut rainbow = Countdown::idle();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let mut events: Vec<InputEvent> = Vec::new();
        let mut toggle_theme = false;

        // 1. Window resize refreshes the breakpoint-derived step and mount.
        if rl.is_window_resized() {
            screen_width = rl.get_screen_width();
            screen_height = rl.get_screen_height();
            region = carousel_region(screen_width, screen_height);
            metrics = metrics_for_width(screen_width);
            events.push(InputEvent::Resize { width: screen_width });
        }

        // 2. Keyboard, bound globally.
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(InputEvent::ArrowLeft);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(InputEvent::ArrowRight);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            events.push(InputEvent::PlayPauseToggle);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            toggle_theme = true;
        }
        while let Some(key) = rl.get_key_pressed() {
            if konami.press(key_press(key)) {
                info!("konami code accepted");
                rainbow.schedule(RAINBOW_DURATION);
            }
        }

        // 3. Pointer: hover edges, control clicks, swipe gestures.
        let chrome = match (&region, &carousel) {
            (Some(r), Some(c)) => Some(ui::chrome(r, c.slide_count())),
            _ => None,
        };
        let mouse = rl.get_mouse_position();
        if let (Some(r), Some(ch)) = (&region, &chrome) {
            if let Some(event) = hover.update(r.contains(mouse.x, mouse.y)) {
                events.push(event);
            }
            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                if ch.prev_button.contains(mouse.x, mouse.y) {
                    events.push(InputEvent::PrevButton);
                } else if ch.next_button.contains(mouse.x, mouse.y) {
                    events.push(InputEvent::NextButton);
                } else if ch.play_toggle.contains(mouse.x, mouse.y) {
                    events.push(InputEvent::PlayPauseToggle);
                } else if let Some(i) =
                    ch.dots.iter().position(|dot| dot.contains(mouse.x, mouse.y))
                {
                    events.push(InputEvent::Dot(i));
                } else if r.contains(mouse.x, mouse.y) {
                    swipe.begin(mouse.x);
                }
            }
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                if let Some(event) = swipe.end(mouse.x) {
                    events.push(event);
                }
            }
        }

        let theme_rect = ui::theme_toggle_rect(screen_height);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && theme_rect.contains(mouse.x, mouse.y)
        {
            toggle_theme = true;
        }

        if toggle_theme {
            current_theme = current_theme.toggled();
            palette = Palette::for_theme(current_theme);
            if let Some(path) = &preference_path {
                if let Err(e) = theme::store(path, current_theme) {
                    warn!(error = %e, "failed to persist theme preference");
                }
            }
            info!(theme = current_theme.as_str(), "theme toggled");
        }

        // 4. Resolve events through the binding table and advance timers.
        if let Some(c) = carousel.as_mut() {
            for event in events {
                if let Some(command) = input::resolve(event) {
                    c.apply(command);
                }
            }
            c.tick(dt);
        }
        rainbow.tick(dt);
        let rainbow_hue = rainbow
            .remaining()
            .map(|left| (RAINBOW_DURATION - left) * 144.0);

        // 5. Render.
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(palette.background);
        ui::draw_heading(&mut d, &palette, screen_width);
        if let (Some(c), Some(r), Some(ch)) = (&carousel, &region, &chrome) {
            ui::draw_carousel(&mut d, c, &artwork, &palette, r, &metrics);
            ui::draw_chrome(&mut d, c, &palette, ch);
        }
        ui::draw_theme_toggle(&mut d, current_theme, &palette, &theme_rect);
        if let Some(hue) = rainbow_hue {
            ui::draw_rainbow_border(&mut d, hue, screen_width, screen_height);
        }
    }

    Ok(())
}
