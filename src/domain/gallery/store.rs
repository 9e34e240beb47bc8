// SPDX-License-Identifier: MPL-2.0
//! Gallery store holding the ordered art pieces and the current position.
//!
//! Navigation saturates at both ends of the sequence: `next()` on the last
//! piece and `back()` on the first piece are no-ops, never errors, and never
//! wrap around.

use super::ArtPiece;
use crate::domain::error::GalleryError;

/// Outcome of a navigation request.
///
/// The presentation layer uses this as its change signal: only `Moved`
/// requires a re-render of the card or a persisted-state write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The current index changed.
    Moved { from: usize, to: usize },
    /// The request hit a boundary and the index stayed where it was.
    Saturated,
}

impl Navigation {
    /// Returns whether the navigation changed the current index.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Navigation state snapshot for UI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether `next()` would move.
    pub has_next: bool,
    /// Whether `back()` would move.
    pub has_previous: bool,
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Total number of art pieces.
    pub total_count: usize,
}

/// Ordered, non-empty collection of art pieces with a bounded cursor.
///
/// The invariant `index < items.len()` holds from construction onwards:
/// [`GalleryStore::new`] refuses empty input and clamps the start index, and
/// the index is only mutated through [`next`](Self::next) and
/// [`back`](Self::back).
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryStore {
    items: Vec<ArtPiece>,
    index: usize,
}

impl GalleryStore {
    /// Creates a store positioned at `start_index`, clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `items` is empty.
    pub fn new(items: Vec<ArtPiece>, start_index: usize) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::Empty);
        }
        let index = start_index.min(items.len() - 1);
        Ok(Self { items, index })
    }

    /// Returns the art piece at the current index.
    #[must_use]
    pub fn current(&self) -> &ArtPiece {
        &self.items[self.index]
    }

    /// Moves one piece forward, saturating at the last piece.
    pub fn next(&mut self) -> Navigation {
        if self.index + 1 < self.items.len() {
            let from = self.index;
            self.index += 1;
            Navigation::Moved {
                from,
                to: self.index,
            }
        } else {
            Navigation::Saturated
        }
    }

    /// Moves one piece backward, saturating at the first piece.
    pub fn back(&mut self) -> Navigation {
        if self.index > 0 {
            let from = self.index;
            self.index -= 1;
            Navigation::Moved {
                from,
                to: self.index,
            }
        } else {
            Navigation::Saturated
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of art pieces. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[ArtPiece] {
        &self.items
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.index + 1 == self.items.len()
    }

    /// Returns the piece `next()` would move to, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<&ArtPiece> {
        self.items.get(self.index + 1)
    }

    /// Returns the piece `back()` would move to, without moving.
    #[must_use]
    pub fn peek_back(&self) -> Option<&ArtPiece> {
        self.index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: !self.is_at_last(),
            has_previous: !self.is_at_first(),
            current_index: self.index,
            total_count: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(count: usize) -> Vec<ArtPiece> {
        (0..count)
            .map(|i| {
                ArtPiece::new(
                    format!("Piece {i}"),
                    format!("Author {i}"),
                    format!("https://example.com/{i}.jpg"),
                )
            })
            .collect()
    }

    fn abc() -> (Vec<ArtPiece>, GalleryStore) {
        let items = vec![
            ArtPiece::new("A", "Author A", "a.png"),
            ArtPiece::new("B", "Author B", "b.png"),
            ArtPiece::new("C", "Author C", "c.png"),
        ];
        let store = GalleryStore::new(items.clone(), 0).expect("non-empty gallery");
        (items, store)
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(GalleryStore::new(Vec::new(), 0), Err(GalleryError::Empty));
    }

    #[test]
    fn every_valid_start_index_selects_that_piece() {
        let items = pieces(5);
        for start in 0..items.len() {
            let store = GalleryStore::new(items.clone(), start).expect("non-empty gallery");
            assert_eq!(store.current(), &items[start]);
            assert_eq!(store.index(), start);
        }
    }

    #[test]
    fn out_of_range_start_index_is_clamped_to_last() {
        let items = pieces(3);
        let store = GalleryStore::new(items.clone(), 42).expect("non-empty gallery");
        assert_eq!(store.index(), 2);
        assert_eq!(store.current(), &items[2]);
    }

    #[test]
    fn walkthrough_saturates_at_the_end() {
        let (items, mut store) = abc();

        assert_eq!(store.next(), Navigation::Moved { from: 0, to: 1 });
        assert_eq!(store.current(), &items[1]);

        assert_eq!(store.next(), Navigation::Moved { from: 1, to: 2 });
        assert_eq!(store.current(), &items[2]);

        assert_eq!(store.next(), Navigation::Saturated);
        assert_eq!(store.current(), &items[2]);

        assert_eq!(store.back(), Navigation::Moved { from: 2, to: 1 });
        assert_eq!(store.current(), &items[1]);
    }

    #[test]
    fn next_is_idempotent_at_last_piece() {
        let (items, mut store) = abc();
        store.next();
        store.next();
        for _ in 0..10 {
            assert!(!store.next().moved());
            assert_eq!(store.current(), &items[2]);
        }
    }

    #[test]
    fn back_is_idempotent_at_first_piece() {
        let (items, mut store) = abc();
        for _ in 0..10 {
            assert_eq!(store.back(), Navigation::Saturated);
            assert_eq!(store.current(), &items[0]);
        }
    }

    #[test]
    fn index_never_leaves_bounds_for_mixed_sequences() {
        let mut store = GalleryStore::new(pieces(4), 1).expect("non-empty gallery");
        // Deterministic pseudo-random walk
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                store.next();
            } else {
                store.back();
            }
            assert!(store.index() < store.len());
        }
    }

    #[test]
    fn single_piece_gallery_never_moves() {
        let mut store = GalleryStore::new(pieces(1), 0).expect("non-empty gallery");
        assert!(store.is_at_first());
        assert!(store.is_at_last());
        assert_eq!(store.next(), Navigation::Saturated);
        assert_eq!(store.back(), Navigation::Saturated);
        assert_eq!(store.index(), 0);
    }

    #[test]
    fn peek_does_not_move() {
        let (items, store) = abc();
        assert_eq!(store.peek_next(), Some(&items[1]));
        assert_eq!(store.peek_back(), None);
        assert_eq!(store.index(), 0);
    }

    #[test]
    fn navigation_info_reflects_boundaries() {
        let (_, mut store) = abc();
        let info = store.navigation_info();
        assert!(info.has_next);
        assert!(!info.has_previous);
        assert_eq!(info.current_index, 0);
        assert_eq!(info.total_count, 3);

        store.next();
        store.next();
        let info = store.navigation_info();
        assert!(!info.has_next);
        assert!(info.has_previous);
        assert_eq!(info.current_index, 2);
    }
}
