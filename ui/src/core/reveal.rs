//! One-shot, staggered fade-in for elements scrolling into view.
//!
//! The tracker starts with the ids of every element that should animate in.
//! Each visibility batch reveals the intersecting elements that are still
//! pending, spaced `stagger_ms` apart by their position in the batch, and
//! removes them for good.

use std::collections::BTreeSet;

/// One entry of a visibility batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionSample {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn visible(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
        }
    }
}

/// A scheduled reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCue {
    pub id: String,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    pending: BTreeSet<String>,
    stagger_ms: u64,
}

impl RevealTracker {
    /// `None` when there is nothing to animate.
    pub fn new<I, S>(ids: I, stagger_ms: u64) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pending: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        if pending.is_empty() {
            return None;
        }
        Some(Self {
            pending,
            stagger_ms,
        })
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn process(&mut self, batch: &[IntersectionSample]) -> Vec<RevealCue> {
        let stagger_ms = self.stagger_ms;
        batch
            .iter()
            .enumerate()
            .filter(|(_, sample)| sample.is_intersecting)
            .filter_map(|(position, sample)| {
                self.pending.remove(&sample.id).then(|| RevealCue {
                    id: sample.id.clone(),
                    delay_ms: position as u64 * stagger_ms,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_track_builds_nothing() {
        assert!(RevealTracker::new(Vec::<String>::new(), 100).is_none());
    }

    #[test]
    fn stagger_follows_position_in_batch() {
        let mut tracker = RevealTracker::new(["a", "b", "c"], 100).unwrap();
        let cues = tracker.process(&[
            IntersectionSample::visible("a"),
            IntersectionSample::hidden("b"),
            IntersectionSample::visible("c"),
        ]);
        assert_eq!(
            cues,
            vec![
                RevealCue { id: "a".into(), delay_ms: 0 },
                RevealCue { id: "c".into(), delay_ms: 200 },
            ]
        );
        assert!(tracker.is_pending("b"));
    }

    #[test]
    fn each_element_is_revealed_once() {
        let mut tracker = RevealTracker::new(["card-1", "card-2"], 100).unwrap();
        assert_eq!(tracker.process(&[IntersectionSample::visible("card-1")]).len(), 1);
        assert!(tracker.process(&[IntersectionSample::visible("card-1")]).is_empty());

        let cues = tracker.process(&[
            IntersectionSample::visible("card-1"),
            IntersectionSample::visible("card-2"),
        ]);
        assert_eq!(cues, vec![RevealCue { id: "card-2".into(), delay_ms: 100 }]);
        assert!(tracker.is_finished());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = RevealTracker::new(["intro"], 100).unwrap();
        assert!(tracker.process(&[IntersectionSample::visible("footer")]).is_empty());
        assert!(!tracker.is_finished());
    }
}
