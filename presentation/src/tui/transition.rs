//! Exit transition - the chat surface collapses towards the bottom edge
//!
//! Frame geometry is computed here; the app loop drives the frames.

use ratatui::layout::Rect;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitTransition {
    duration: Duration,
}

impl ExitTransition {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn frame_interval(&self) -> Duration {
        FRAME_INTERVAL
    }

    /// Number of frames to draw; zero for an instant close.
    pub fn frame_count(&self) -> u32 {
        if self.duration.is_zero() {
            return 0;
        }
        let frames = self.duration.as_millis() / FRAME_INTERVAL.as_millis();
        frames.max(1) as u32
    }

    /// Area still covered by the surface at `frame` (0-based).
    ///
    /// Frame 0 is the full area; the height shrinks linearly and the top edge
    /// moves down so the surface slides out at the bottom.
    pub fn visible_area(&self, area: Rect, frame: u32) -> Rect {
        let frames = self.frame_count();
        if frames == 0 || frame >= frames {
            return Rect {
                y: area.bottom(),
                height: 0,
                ..area
            };
        }

        let remaining = (area.height as u32 * (frames - frame) / frames) as u16;
        Rect {
            y: area.y + (area.height - remaining),
            height: remaining,
            ..area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count() {
        assert_eq!(ExitTransition::from_millis(0).frame_count(), 0);
        assert_eq!(ExitTransition::from_millis(10).frame_count(), 1);
        assert_eq!(ExitTransition::from_millis(500).frame_count(), 12);
    }

    #[test]
    fn test_surface_slides_down() {
        let transition = ExitTransition::from_millis(400);
        let area = Rect::new(0, 0, 80, 20);

        assert_eq!(transition.visible_area(area, 0), area);

        let half = transition.visible_area(area, 5);
        assert_eq!(half.height, 10);
        assert_eq!(half.y, 10);
        assert_eq!(half.bottom(), area.bottom());

        let gone = transition.visible_area(area, 10);
        assert_eq!(gone.height, 0);
    }

    #[test]
    fn test_instant_transition_has_no_area() {
        let transition = ExitTransition::from_millis(0);
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(transition.visible_area(area, 0).height, 0);
    }
}
