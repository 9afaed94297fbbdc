//! One-shot reveal-on-scroll bookkeeping.
//!
//! Each target goes from pending to revealed exactly once. The observer is
//! told to drop a target in the same step that reveals it, so a revealed
//! element never produces another entry and never re-hides.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::observer::{IntersectionEntry, Observer};

pub struct RevealAnimator<T> {
    targets: Vec<T>,
    revealed: Vec<bool>,
}

impl<T: PartialEq> RevealAnimator<T> {
    /// Track `targets`. Duplicates are collapsed to their first occurrence.
    pub fn new(targets: impl IntoIterator<Item = T>) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for target in targets {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        let revealed = vec![false; unique.len()];
        Self { targets: unique, revealed }
    }

    #[must_use]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Start observing every target that is not yet revealed.
    pub fn observe_all<O: Observer<T>>(&self, observer: &mut O) {
        for (target, revealed) in self.targets.iter().zip(&self.revealed) {
            if !revealed {
                observer.observe(target);
            }
        }
    }

    /// Apply an observer batch and return the targets revealed by it.
    ///
    /// Entries for unknown or already revealed targets are ignored.
    pub fn handle_entries<O, I>(&mut self, entries: I, observer: &mut O) -> Vec<&T>
    where
        O: Observer<T>,
        I: IntoIterator<Item = IntersectionEntry<T>>,
    {
        let mut newly = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(index) = self.targets.iter().position(|target| *target == entry.target) else {
                continue;
            };
            if self.revealed[index] {
                continue;
            }
            self.revealed[index] = true;
            observer.unobserve(&self.targets[index]);
            newly.push(index);
        }
        newly.into_iter().map(|index| &self.targets[index]).collect()
    }

    #[must_use]
    pub fn is_revealed(&self, target: &T) -> bool {
        self.targets
            .iter()
            .position(|candidate| candidate == target)
            .is_some_and(|index| self.revealed[index])
    }

    /// Number of targets still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }
}
