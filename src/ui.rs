use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::carousel::layout::{Metrics, Region};
use crate::slide::Slide;
use crate::texture_loader::{Artwork, placeholder_hue};
use crate::theme::{Palette, Theme};

const DOT_SPACING: f32 = 22.0;
const DOT_HIT: f32 = 16.0;
const NAV_BUTTON: f32 = 44.0;

/// Clickable surfaces of the carousel, laid out from the mount region. The
/// theme toggle lives outside the region (bottom-left of the window, where
/// the original page pinned it) and is computed separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub prev_button: Region,
    pub next_button: Region,
    pub play_toggle: Region,
    pub dots: Vec<Region>,
}

pub fn chrome(region: &Region, slide_count: usize) -> Chrome {
    let card_band = region.height - 48.0;
    let button_y = region.y + (card_band - NAV_BUTTON) / 2.0;
    let prev_button = Region {
        x: region.x + 8.0,
        y: button_y,
        width: NAV_BUTTON,
        height: NAV_BUTTON,
    };
    let next_button = Region {
        x: region.x + region.width - NAV_BUTTON - 8.0,
        y: button_y,
        width: NAV_BUTTON,
        height: NAV_BUTTON,
    };

    let row_width = slide_count as f32 * DOT_SPACING;
    let row_y = region.y + region.height - 32.0;
    let start_x = region.center_x() - row_width / 2.0;
    let dots = (0..slide_count)
        .map(|i| Region {
            x: start_x + i as f32 * DOT_SPACING + (DOT_SPACING - DOT_HIT) / 2.0,
            y: row_y,
            width: DOT_HIT,
            height: DOT_HIT,
        })
        .collect();

    let play_toggle = Region {
        x: start_x + row_width + 14.0,
        y: row_y - 4.0,
        width: 24.0,
        height: 24.0,
    };

    Chrome { prev_button, next_button, play_toggle, dots }
}

pub fn theme_toggle_rect(screen_height: i32) -> Region {
    Region {
        x: 20.0,
        y: screen_height as f32 - 64.0,
        width: NAV_BUTTON,
        height: NAV_BUTTON,
    }
}

/// Greedy word wrap against a caller-supplied measure, so layout stays
/// testable away from the font engine.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn draw_heading(d: &mut RaylibDrawHandle, palette: &Palette, screen_width: i32) {
    let title = "Selected Work";
    let width = measure_text(title, 32);
    d.draw_text(title, (screen_width - width) / 2, 22, 32, palette.text_primary);
    let sub = "Projects I keep coming back to";
    let sub_width = measure_text(sub, 16);
    d.draw_text(sub, (screen_width - sub_width) / 2, 58, 16, palette.text_muted);
}

pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    carousel: &Carousel,
    artwork: &[Artwork],
    palette: &Palette,
    region: &Region,
    metrics: &Metrics,
) {
    let count = carousel.slide_count();
    let track = carousel.track();
    let card_band = region.height - 48.0;
    let card_y = region.y + (card_band - metrics.card_height) / 2.0;
    let base_x = region.center_x() - metrics.card_width / 2.0 - track.offset();

    // Slot `count` is the clone of the first slide used for the seamless
    // forward wrap; it shows the same record and artwork.
    for slot in 0..=count {
        let x = base_x + slot as f32 * track.step();
        if x + metrics.card_width < region.x || x > region.x + region.width {
            continue;
        }
        let index = slot % count;
        draw_card(
            d,
            x,
            card_y,
            metrics,
            &carousel.slides()[index],
            &artwork[index],
            palette,
        );
    }
}

fn draw_card(
    d: &mut impl RaylibDraw,
    x: f32,
    y: f32,
    metrics: &Metrics,
    slide: &Slide,
    artwork: &Artwork,
    palette: &Palette,
) {
    let card = Rectangle::new(x, y, metrics.card_width, metrics.card_height);
    d.draw_rectangle_rounded(card, 0.06, 8, palette.surface);
    d.draw_rectangle_lines_ex(card, 1.0, palette.surface_border);

    // Artwork panel fills the upper half of the card.
    let art = Rectangle::new(x + 12.0, y + 12.0, metrics.card_width - 24.0, metrics.card_height * 0.48);
    match artwork {
        Artwork::Texture(texture) => {
            let tw = texture.width() as f32;
            let th = texture.height() as f32;
            let scale = (art.width / tw).min(art.height / th);
            let dest = Rectangle::new(
                art.x + (art.width - tw * scale) / 2.0,
                art.y + (art.height - th * scale) / 2.0,
                tw * scale,
                th * scale,
            );
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tw, th),
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
        Artwork::Placeholder { label } => {
            let tint = Color::color_from_hsv(placeholder_hue(label), 0.35, 0.75);
            d.draw_rectangle_rec(art, tint);
            let font = 20;
            let width = measure_text(label, font);
            d.draw_text(
                label,
                (art.x + (art.width - width as f32) / 2.0) as i32,
                (art.y + art.height / 2.0 - font as f32 / 2.0) as i32,
                font,
                Color::WHITE,
            );
        }
    }

    // Badge chip pinned over the artwork.
    let badge_width = measure_text(slide.badge, 12) as f32 + 16.0;
    let chip = Rectangle::new(x + 20.0, y + 20.0, badge_width, 22.0);
    d.draw_rectangle_rounded(chip, 0.5, 8, palette.accent);
    d.draw_text(slide.badge, (chip.x + 8.0) as i32, (chip.y + 5.0) as i32, 12, palette.accent_text);

    let text_x = (x + 16.0) as i32;
    let mut cursor = y + 12.0 + art.height + 14.0;
    d.draw_text(slide.title, text_x, cursor as i32, 22, palette.text_primary);
    cursor += 32.0;

    let max_text = metrics.card_width as i32 - 32;
    for line in wrap_text(slide.description, max_text, |s| measure_text(s, 15)).iter().take(3) {
        d.draw_text(line, text_x, cursor as i32, 15, palette.text_muted);
        cursor += 20.0;
    }
    cursor += 6.0;

    let mut chip_x = x + 16.0;
    for tag in slide.tech {
        let tag_width = measure_text(tag, 12) as f32 + 14.0;
        if chip_x + tag_width > x + metrics.card_width - 16.0 {
            break;
        }
        let tag_chip = Rectangle::new(chip_x, cursor, tag_width, 20.0);
        d.draw_rectangle_rounded(tag_chip, 0.5, 8, palette.chip_bg);
        d.draw_text(tag, (chip_x + 7.0) as i32, (cursor + 4.0) as i32, 12, palette.chip_text);
        chip_x += tag_width + 8.0;
    }

    d.draw_text(
        slide.outcome,
        text_x,
        (y + metrics.card_height - 28.0) as i32,
        14,
        palette.accent,
    );
}

pub fn draw_chrome(d: &mut RaylibDrawHandle, carousel: &Carousel, palette: &Palette, chrome: &Chrome) {
    draw_nav_button(d, &chrome.prev_button, palette, true);
    draw_nav_button(d, &chrome.next_button, palette, false);

    for (i, dot) in chrome.dots.iter().enumerate() {
        let center = Vector2::new(dot.x + dot.width / 2.0, dot.y + dot.height / 2.0);
        if i == carousel.current() {
            d.draw_circle_v(center, 7.0, palette.accent);
        } else {
            d.draw_circle_v(center, 5.0, palette.dot_idle);
        }
    }

    let toggle = &chrome.play_toggle;
    let center = Vector2::new(toggle.x + toggle.width / 2.0, toggle.y + toggle.height / 2.0);
    if carousel.is_playing() {
        let bar_h = 14.0;
        d.draw_rectangle_rec(
            Rectangle::new(center.x - 6.0, center.y - bar_h / 2.0, 4.0, bar_h),
            palette.control_icon,
        );
        d.draw_rectangle_rec(
            Rectangle::new(center.x + 2.0, center.y - bar_h / 2.0, 4.0, bar_h),
            palette.control_icon,
        );
    } else {
        d.draw_poly(center, 3, 8.0, 90.0, palette.control_icon);
    }
}

fn draw_nav_button(d: &mut RaylibDrawHandle, rect: &Region, palette: &Palette, left: bool) {
    let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    d.draw_circle_v(center, rect.width / 2.0, palette.control_bg);
    let dir = if left { -1.0 } else { 1.0 };
    let tip = Vector2::new(center.x + dir * 6.0, center.y);
    let top = Vector2::new(center.x - dir * 3.0, center.y - 8.0);
    let bottom = Vector2::new(center.x - dir * 3.0, center.y + 8.0);
    d.draw_line_ex(top, tip, 3.0, palette.control_icon);
    d.draw_line_ex(bottom, tip, 3.0, palette.control_icon);
}

pub fn draw_theme_toggle(d: &mut RaylibDrawHandle, theme: Theme, palette: &Palette, rect: &Region) {
    let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    d.draw_circle_v(center, rect.width / 2.0, palette.control_bg);
    match theme {
        Theme::Light => {
            // Moon: the click takes you to dark mode.
            d.draw_circle_v(center, 9.0, palette.control_icon);
            d.draw_circle_v(Vector2::new(center.x + 5.0, center.y - 3.0), 8.0, palette.control_bg);
        }
        Theme::Dark => {
            // Sun.
            d.draw_circle_v(center, 7.0, palette.control_icon);
            for i in 0..8 {
                let angle = (i as f32) * std::f32::consts::FRAC_PI_4;
                let from = Vector2::new(
                    center.x + angle.cos() * 10.0,
                    center.y + angle.sin() * 10.0,
                );
                let to = Vector2::new(
                    center.x + angle.cos() * 14.0,
                    center.y + angle.sin() * 14.0,
                );
                d.draw_line_ex(from, to, 2.0, palette.control_icon);
            }
        }
    }
}

/// Easter-egg overlay: a hue-cycling border around the whole window.
pub fn draw_rainbow_border(d: &mut RaylibDrawHandle, hue: f32, screen_width: i32, screen_height: i32) {
    let color = Color::color_from_hsv(hue % 360.0, 0.8, 1.0);
    let t = 6;
    d.draw_rectangle(0, 0, screen_width, t, color);
    d.draw_rectangle(0, screen_height - t, screen_width, t, color);
    d.draw_rectangle(0, 0, t, screen_height, color);
    d.draw_rectangle(screen_width - t, 0, t, screen_height, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region { x: 60.0, y: 100.0, width: 1160.0, height: 508.0 }
    }

    #[test]
    fn chrome_has_one_dot_per_slide_inside_the_region() {
        let region = region();
        let chrome = chrome(&region, 5);
        assert_eq!(chrome.dots.len(), 5);
        for dot in &chrome.dots {
            assert!(dot.x >= region.x);
            assert!(dot.x + dot.width <= region.x + region.width);
        }
    }

    #[test]
    fn nav_buttons_sit_on_opposite_edges() {
        let region = region();
        let chrome = chrome(&region, 5);
        assert!(chrome.prev_button.x < region.center_x());
        assert!(chrome.next_button.x > region.center_x());
        assert_eq!(chrome.prev_button.y, chrome.next_button.y);
    }

    #[test]
    fn wrap_text_respects_the_measure() {
        // Every char one unit wide: max width 10 chars per line.
        let lines = wrap_text("alpha beta gamma delta", 10, |s| s.len() as i32);
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn wrap_text_keeps_an_overlong_word_on_its_own_line() {
        let lines = wrap_text("tiny extraordinarily tiny", 8, |s| s.len() as i32);
        assert_eq!(lines, vec!["tiny", "extraordinarily", "tiny"]);
    }

    #[test]
    fn wrap_text_of_empty_input_is_empty() {
        assert!(wrap_text("", 10, |s| s.len() as i32).is_empty());
    }
}
