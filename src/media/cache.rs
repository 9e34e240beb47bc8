// SPDX-License-Identifier: MPL-2.0
//! Image cache keyed by `imageUrl`.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used entries go first
//! - **Count-bounded**: capacity comes from `[images] cache_capacity`
//! - **Failures cached**: a URL that failed stays failed until evicted, so the
//!   placeholder does not flicker through repeated retries
//! - **Pending set**: URLs with a request in flight are not requested again

use crate::config::{DEFAULT_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY, MIN_IMAGE_CACHE_CAPACITY};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
enum CacheEntry {
    Ready(Handle),
    Failed(String),
}

/// What the view should show for a given URL.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Ready(Handle),
    Loading,
    Failed(String),
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub pending: usize,
    pub insertions: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    entries: LruCache<String, CacheEntry>,
    pending: HashSet<String>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` entries (clamped to the allowed range).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Returns whether `url` has neither an entry nor a request in flight.
    #[must_use]
    pub fn needs_fetch(&self, url: &str) -> bool {
        !self.entries.contains(url) && !self.pending.contains(url)
    }

    pub fn mark_pending(&mut self, url: &str) {
        self.pending.insert(url.to_string());
    }

    pub fn insert_ready(&mut self, url: String, handle: Handle) {
        self.insert(url, CacheEntry::Ready(handle));
    }

    pub fn insert_failed(&mut self, url: String, reason: String) {
        self.insert(url, CacheEntry::Failed(reason));
    }

    fn insert(&mut self, url: String, entry: CacheEntry) {
        self.pending.remove(&url);
        if let Some((evicted, _)) = self.entries.push(url.clone(), entry) {
            // `push` also returns the old value when the key was already present
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
        self.stats.insertions += 1;
    }

    /// Marks `url` as most recently used, if cached.
    pub fn promote(&mut self, url: &str) {
        self.entries.promote(url);
    }

    /// Looks up `url` without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> ImageSlot {
        match self.entries.peek(url) {
            Some(CacheEntry::Ready(handle)) => ImageSlot::Ready(handle.clone()),
            Some(CacheEntry::Failed(reason)) => ImageSlot::Failed(reason.clone()),
            None => ImageSlot::Loading,
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            pending: self.pending.len(),
            ..self.stats
        }
    }
}
