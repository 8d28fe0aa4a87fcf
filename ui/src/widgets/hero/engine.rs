//! Hero slider state: active slide, autoplay timer and swipe gesture.

use crate::core::autoplay::{Autoplay, TimerToken};
use crate::core::carousel::{Carousel, IndexChange};
use crate::core::config::{ImageItem, InteractionConfig};
use crate::core::keys::NavKey;
use crate::core::swipe::{SwipeDirection, SwipeTracker};

/// Result of a navigation: the slide change plus the timer the view has to
/// schedule, if autoplay is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideUpdate {
    pub change: IndexChange,
    pub timer: Option<TimerToken>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroEngine {
    carousel: Carousel<ImageItem>,
    autoplay: Autoplay,
    swipe: SwipeTracker,
}

impl HeroEngine {
    /// `None` when there are no slides; nothing gets wired up in that case.
    pub fn new(slides: Vec<ImageItem>, config: &InteractionConfig) -> Option<Self> {
        Some(Self {
            carousel: Carousel::new(slides)?,
            autoplay: Autoplay::new(config.autoplay_interval_ms),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        })
    }

    pub fn slides(&self) -> &[ImageItem] {
        self.carousel.items()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn interval_ms(&self) -> u64 {
        self.autoplay.interval_ms()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn start_autoplay(&mut self) -> TimerToken {
        self.autoplay.start()
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    pub fn reset_autoplay(&mut self) -> Option<TimerToken> {
        self.autoplay.reset()
    }

    /// Every navigation restarts the timer so the visitor gets a full interval
    /// on the slide they picked.
    pub fn go_to(&mut self, index: i64) -> SlideUpdate {
        let change = self.carousel.go_to(index);
        let timer = self.reset_autoplay();
        SlideUpdate { change, timer }
    }

    pub fn next(&mut self) -> SlideUpdate {
        self.go_to(self.carousel.current_index() as i64 + 1)
    }

    pub fn prev(&mut self) -> SlideUpdate {
        self.go_to(self.carousel.current_index() as i64 - 1)
    }

    /// A scheduled timer elapsed. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<SlideUpdate> {
        if self.autoplay.fire(token) {
            Some(self.next())
        } else {
            None
        }
    }

    pub fn pointer_enter(&mut self) {
        self.autoplay.pause();
    }

    pub fn pointer_leave(&mut self) -> TimerToken {
        self.autoplay.resume()
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    pub fn touch_end(&mut self, x: f64) -> Option<SlideUpdate> {
        match self.swipe.finish(x)? {
            SwipeDirection::Forward => Some(self.next()),
            SwipeDirection::Backward => Some(self.prev()),
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> Option<SlideUpdate> {
        match key {
            NavKey::ArrowLeft => Some(self.prev()),
            NavKey::ArrowRight => Some(self.next()),
            NavKey::Escape | NavKey::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<ImageItem> {
        (0..n)
            .map(|i| ImageItem {
                src: format!("/images/hero-{i}.jpg"),
                alt: format!("Slide {i}"),
            })
            .collect()
    }

    fn engine(n: usize) -> HeroEngine {
        HeroEngine::new(slides(n), &InteractionConfig::default()).unwrap()
    }

    #[test]
    fn no_slides_no_engine() {
        assert!(HeroEngine::new(Vec::new(), &InteractionConfig::default()).is_none());
    }

    #[test]
    fn prev_from_first_slide_wraps_to_last() {
        let mut hero = engine(3);
        hero.go_to(0);
        let update = hero.prev();
        assert_eq!(update.change.previous, 0);
        assert_eq!(hero.current_index(), 2);
    }

    #[test]
    fn manual_navigation_restarts_the_timer() {
        let mut hero = engine(3);
        let initial = hero.start_autoplay();
        let update = hero.next();
        let restarted = update.timer.expect("autoplay is running");
        assert_ne!(initial, restarted);
        assert!(hero.on_timer(initial).is_none(), "old timer must not advance");
        assert_eq!(hero.current_index(), 1);

        let advanced = hero.on_timer(restarted).expect("live timer advances");
        assert_eq!(advanced.change.current, 2);
        assert!(advanced.timer.is_some(), "auto-advance schedules the next tick");
    }

    #[test]
    fn hovering_pauses_until_the_pointer_leaves() {
        let mut hero = engine(4);
        let token = hero.start_autoplay();
        hero.pointer_enter();
        assert!(!hero.is_autoplaying());
        assert!(hero.on_timer(token).is_none());

        let update = hero.next();
        assert_eq!(update.timer, None, "navigation while hovered stays paused");

        let resumed = hero.pointer_leave();
        assert!(hero.on_timer(resumed).is_some());
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut hero = engine(3);
        hero.touch_start(200.0);
        assert!(hero.touch_end(151.0).is_none());
        assert_eq!(hero.current_index(), 0);

        hero.touch_start(200.0);
        let forward = hero.touch_end(149.0).unwrap();
        assert_eq!(forward.change.current, 1);

        hero.touch_start(200.0);
        let back = hero.touch_end(251.0).unwrap();
        assert_eq!(back.change.current, 0);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut hero = engine(3);
        assert_eq!(hero.handle_key(NavKey::ArrowLeft).unwrap().change.current, 2);
        assert_eq!(hero.handle_key(NavKey::ArrowRight).unwrap().change.current, 0);
        assert!(hero.handle_key(NavKey::Escape).is_none());
    }

    #[test]
    fn single_slide_survives_every_input() {
        let mut hero = engine(1);
        hero.next();
        hero.prev();
        hero.touch_start(0.0);
        hero.touch_end(500.0);
        assert_eq!(hero.current_index(), 0);
    }
}
