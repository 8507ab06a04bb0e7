/// Card metrics chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub card_width: f32,
    pub card_height: f32,
    pub gap: f32,
}

impl Metrics {
    /// Pixel distance the strip advances per slot.
    pub fn step(&self) -> f32 {
        self.card_width + self.gap
    }
}

/// Breakpoint lookup table: viewport width decides how large a card is and
/// therefore how far one navigation step moves the strip. Must be re-queried
/// on every resize.
pub fn metrics_for_width(width: i32) -> Metrics {
    if width <= 700 {
        Metrics { card_width: 300.0, card_height: 400.0, gap: 16.0 }
    } else if width <= 1100 {
        Metrics { card_width: 420.0, card_height: 440.0, gap: 24.0 }
    } else {
        Metrics { card_width: 520.0, card_height: 460.0, gap: 32.0 }
    }
}

/// Axis-aligned region in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

const SIDE_MARGIN: f32 = 60.0;
const HEADING_CLEARANCE: f32 = 90.0;
const DOT_STRIP_HEIGHT: f32 = 48.0;
const MIN_WINDOW_WIDTH: i32 = 420;
const MIN_WINDOW_HEIGHT: i32 = 520;

/// Mount region for the carousel inside the window, or None when the window
/// cannot host it. A missing mount disables the whole component.
pub fn carousel_region(screen_width: i32, screen_height: i32) -> Option<Region> {
    if screen_width < MIN_WINDOW_WIDTH || screen_height < MIN_WINDOW_HEIGHT {
        return None;
    }
    let metrics = metrics_for_width(screen_width);
    let width = screen_width as f32 - 2.0 * SIDE_MARGIN;
    let height = metrics.card_height + DOT_STRIP_HEIGHT;
    let free = (screen_height as f32 - HEADING_CLEARANCE - height).max(0.0);
    Some(Region {
        x: SIDE_MARGIN,
        y: HEADING_CLEARANCE + free / 2.0,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_wider_steps_on_wider_viewports() {
        let narrow = metrics_for_width(640);
        let medium = metrics_for_width(1024);
        let wide = metrics_for_width(1600);
        assert!(narrow.step() < medium.step());
        assert!(medium.step() < wide.step());
    }

    #[test]
    fn breakpoint_edges_are_inclusive() {
        assert_eq!(metrics_for_width(700), metrics_for_width(500));
        assert_eq!(metrics_for_width(1100), metrics_for_width(800));
        assert_ne!(metrics_for_width(1101), metrics_for_width(1100));
    }

    #[test]
    fn tiny_windows_have_no_mount_region() {
        assert!(carousel_region(300, 300).is_none());
        assert!(carousel_region(1280, 400).is_none());
    }

    #[test]
    fn mount_region_fits_inside_the_window() {
        let region = carousel_region(1280, 720).expect("region");
        assert!(region.x >= 0.0 && region.y >= 0.0);
        assert!(region.x + region.width <= 1280.0);
        assert!(region.y + region.height <= 720.0);
    }

    #[test]
    fn region_containment_is_half_open() {
        let region = Region { x: 10.0, y: 10.0, width: 100.0, height: 50.0 };
        assert!(region.contains(10.0, 10.0));
        assert!(region.contains(109.9, 59.9));
        assert!(!region.contains(110.0, 30.0));
        assert!(!region.contains(50.0, 60.0));
    }
}
