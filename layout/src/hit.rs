#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{Point, Rect};

/// An interactive target registered for hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion<K> {
    pub key: K,
    pub rect: Rect,
    /// Stacking order. Higher is on top.
    pub z: i32,
}

/// Flat index of interactive targets in screen space.
///
/// Stands in for "topmost element at point" on a live visual tree. The
/// overlay registers at most a few dozen cards, so lookup is a linear scan.
#[derive(Debug, Clone)]
pub struct HitIndex<K> {
    regions: Vec<HitRegion<K>>,
}

impl<K> Default for HitIndex<K> {
    fn default() -> Self {
        Self { regions: Vec::new() }
    }
}

impl<K> HitIndex<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. Among equal `z`, later registrations sit on top.
    pub fn insert(&mut self, key: K, rect: Rect, z: i32) {
        self.regions.push(HitRegion { key, rect, z });
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &HitRegion<K>> {
        self.regions.iter()
    }

    /// The topmost target containing `pt`, if any.
    #[must_use]
    pub fn topmost_at(&self, pt: Point) -> Option<&HitRegion<K>> {
        // `max_by_key` keeps the last of equal maxima, which is the later registration.
        self.regions.iter().filter(|r| r.rect.contains(pt)).max_by_key(|r| r.z)
    }
}
