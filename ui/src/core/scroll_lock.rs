//! Body scroll lock shared by the mobile menu and the lightbox.
//!
//! The lock tracks who holds it. The page stays locked while any owner
//! remains, and an owner can only release its own claim.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockOwner {
    MobileMenu,
    Lightbox,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    owners: BTreeSet<LockOwner>,
}

impl ScrollLock {
    /// Claim the lock. Returns `true` if the owner did not hold it yet.
    pub fn acquire(&mut self, owner: LockOwner) -> bool {
        self.owners.insert(owner)
    }

    /// Drop a claim. Returns `true` if the owner held it.
    pub fn release(&mut self, owner: LockOwner) -> bool {
        self.owners.remove(&owner)
    }

    pub fn is_locked(&self) -> bool {
        !self.owners.is_empty()
    }

    pub fn is_held_by(&self, owner: LockOwner) -> bool {
        self.owners.contains(&owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_survives_until_last_owner_releases() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire(LockOwner::MobileMenu));
        assert!(lock.acquire(LockOwner::Lightbox));

        assert!(lock.release(LockOwner::Lightbox));
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockOwner::MobileMenu));

        assert!(lock.release(LockOwner::MobileMenu));
        assert!(!lock.is_locked());
    }

    #[test]
    fn claims_are_idempotent() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire(LockOwner::Lightbox));
        assert!(!lock.acquire(LockOwner::Lightbox));
        assert!(!lock.release(LockOwner::MobileMenu));
        assert!(lock.is_locked());
        assert!(lock.release(LockOwner::Lightbox));
        assert!(!lock.release(LockOwner::Lightbox));
    }
}
