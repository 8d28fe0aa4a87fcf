//! Horizontal swipe detection for touch input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: show the next item.
    Forward,
    /// Finger moved left-to-right: show the previous item.
    Backward,
}

/// Classify a touch gesture from its start and end x coordinates.
///
/// Movements up to and including `threshold_px` are taps.
pub fn classify(start_x: f64, end_x: f64, threshold_px: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold_px {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Forward)
    } else {
        Some(SwipeDirection::Backward)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A touch end without a recorded start is ignored.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(start, x, self.threshold_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_moves_are_taps() {
        assert_eq!(classify(200.0, 151.0, 50.0), None);
        assert_eq!(classify(200.0, 249.0, 50.0), None);
        assert_eq!(classify(200.0, 150.0, 50.0), None);
    }

    #[test]
    fn long_moves_pick_a_direction() {
        assert_eq!(classify(200.0, 149.0, 50.0), Some(SwipeDirection::Forward));
        assert_eq!(classify(200.0, 251.0, 50.0), Some(SwipeDirection::Backward));
    }

    #[test]
    fn tracker_consumes_the_start() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        assert_eq!(tracker.finish(10.0), Some(SwipeDirection::Forward));
        assert_eq!(tracker.finish(10.0), None);
    }
}
