//! Gallery lightbox: which image is shown and whether the overlay is open.

use crate::core::carousel::Carousel;
use crate::core::config::ImageItem;
use crate::core::keys::NavKey;
use crate::core::scroll_lock::{LockOwner, ScrollLock};

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxEngine {
    images: Carousel<ImageItem>,
    open: bool,
}

impl LightboxEngine {
    /// `None` without gallery images; no lightbox is built then.
    pub fn new(images: Vec<ImageItem>) -> Option<Self> {
        Some(Self {
            images: Carousel::new(images)?,
            open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.images.current_index()
    }

    /// Image loaded into the overlay's single `<img>`.
    pub fn current(&self) -> &ImageItem {
        self.images.current()
    }

    pub fn images(&self) -> &[ImageItem] {
        self.images.items()
    }

    pub fn open(&mut self, index: usize, lock: &mut ScrollLock) {
        self.images.go_to(index as i64);
        self.open = true;
        lock.acquire(LockOwner::Lightbox);
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.open = false;
        lock.release(LockOwner::Lightbox);
    }

    pub fn next(&mut self) -> usize {
        self.images.next().current
    }

    pub fn prev(&mut self) -> usize {
        self.images.prev().current
    }

    /// Keys only act while the overlay is open. Returns whether the key was
    /// handled.
    pub fn handle_key(&mut self, key: NavKey, lock: &mut ScrollLock) -> bool {
        if !self.open {
            return false;
        }
        match key {
            NavKey::Escape => self.close(lock),
            NavKey::ArrowLeft => {
                self.prev();
            }
            NavKey::ArrowRight => {
                self.next();
            }
            NavKey::Other => return false,
        }
        true
    }
}
