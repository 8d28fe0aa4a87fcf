//! Mobile navigation drawer.

use super::keys::NavKey;
use super::scroll_lock::{LockOwner, ScrollLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self, lock: &mut ScrollLock) {
        if self.is_open() {
            self.close(lock);
        } else {
            self.state = MenuState::Open;
            lock.acquire(LockOwner::MobileMenu);
        }
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.state = MenuState::Closed;
        lock.release(LockOwner::MobileMenu);
    }

    /// Escape closes an open menu. Returns whether the key was handled.
    pub fn handle_key(&mut self, key: NavKey, lock: &mut ScrollLock) -> bool {
        if key == NavKey::Escape && self.is_open() {
            self.close(lock);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_locks_and_unlocks_the_page() {
        let mut lock = ScrollLock::default();
        let mut menu = MobileMenu::default();

        menu.toggle(&mut lock);
        assert!(menu.is_open());
        assert!(lock.is_held_by(LockOwner::MobileMenu));

        menu.toggle(&mut lock);
        assert!(!menu.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn escape_only_acts_while_open() {
        let mut lock = ScrollLock::default();
        let mut menu = MobileMenu::default();
        assert!(!menu.handle_key(NavKey::Escape, &mut lock));

        menu.toggle(&mut lock);
        assert!(!menu.handle_key(NavKey::ArrowLeft, &mut lock));
        assert!(menu.handle_key(NavKey::Escape, &mut lock));
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_keeps_other_owners_lock() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockOwner::Lightbox);
        let mut menu = MobileMenu::default();
        menu.toggle(&mut lock);
        menu.close(&mut lock);
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockOwner::Lightbox));
    }
}
