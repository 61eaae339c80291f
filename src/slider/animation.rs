use serde::Deserialize;

/// Which way a transition moves through the slide set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Direction for a jump from one index to another, as picked for dot clicks.
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Next
        } else {
            Direction::Prev
        }
    }
}

/// Whether a slide is animating in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Fade,
    Slide,
    Zoom,
}

impl AnimationKind {
    /// Stylesheet class for one half of a transition.
    ///
    /// Only `Slide` cares about direction: moving forward pushes slides to the
    /// left, moving back pushes them to the right.
    pub fn class(self, phase: Phase, direction: Direction) -> &'static str {
        match (self, phase, direction) {
            (AnimationKind::Fade, Phase::In, _) => "fade-in",
            (AnimationKind::Fade, Phase::Out, _) => "fade-out",
            (AnimationKind::Slide, Phase::In, Direction::Next) => "slide-left-in",
            (AnimationKind::Slide, Phase::Out, Direction::Next) => "slide-left-out",
            (AnimationKind::Slide, Phase::In, Direction::Prev) => "slide-right-in",
            (AnimationKind::Slide, Phase::Out, Direction::Prev) => "slide-right-out",
            (AnimationKind::Zoom, Phase::In, _) => "zoom-in",
            (AnimationKind::Zoom, Phase::Out, _) => "zoom-out",
        }
    }
}

/// Turn a finished horizontal drag into a navigation direction.
///
/// A drag to the left shows the next slide. Anything within `threshold`
/// pixels is treated as a tap.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        None
    } else if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

/// Two-digit slide counter ("01", "12").
pub fn format_counter(n: usize) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_direction_follows_index_order() {
        assert_eq!(Direction::between(0, 2), Direction::Next);
        assert_eq!(Direction::between(2, 0), Direction::Prev);
        assert_eq!(Direction::between(1, 1), Direction::Prev);
    }

    #[test]
    fn slide_classes_depend_on_direction() {
        let kind = AnimationKind::Slide;
        assert_eq!(kind.class(Phase::Out, Direction::Next), "slide-left-out");
        assert_eq!(kind.class(Phase::In, Direction::Prev), "slide-right-in");
    }

    #[test]
    fn fade_and_zoom_ignore_direction() {
        for direction in [Direction::Next, Direction::Prev] {
            assert_eq!(AnimationKind::Fade.class(Phase::In, direction), "fade-in");
            assert_eq!(AnimationKind::Zoom.class(Phase::Out, direction), "zoom-out");
        }
    }

    #[test]
    fn short_drags_are_not_swipes() {
        assert_eq!(classify_swipe(200.0, 160.0, 50.0), None);
        assert_eq!(classify_swipe(200.0, 150.0, 50.0), None);
        assert_eq!(classify_swipe(200.0, 240.0, 50.0), None);
    }

    #[test]
    fn swipe_left_goes_forward() {
        assert_eq!(classify_swipe(300.0, 100.0, 50.0), Some(Direction::Next));
        assert_eq!(classify_swipe(100.0, 300.0, 50.0), Some(Direction::Prev));
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(format_counter(1), "01");
        assert_eq!(format_counter(3), "03");
        assert_eq!(format_counter(12), "12");
    }
}
