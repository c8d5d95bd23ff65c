#![forbid(unsafe_code)]

//! Ordered, optionally grouped collections of focusable items.
//!
//! A [`FocusCollection`] is a value, not a registry: the navigator never
//! retains one, so callers re-supply the current collection on every call
//! and item deletion needs no invalidation protocol.
//!
//! # Invariants
//!
//! 1. Groups are contiguous, ascending, non-overlapping ranges.
//! 2. When groups are present, they cover the items exactly (a partition).
//! 3. A flat collection has an empty group list; `span_of` then treats the
//!    whole collection as one wrap range.
//! 4. Invalid groupings are rejected at construction; no later operation
//!    can observe a malformed collection.

use crate::error::CollectionError;

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A contiguous range of items forming one wrap region (e.g. the buttons of
/// a single carousel slide).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Index of the first item in the group.
    pub start: usize,
    /// Number of items in the group.
    pub len: usize,
}

impl Group {
    /// Create a group covering `len` items starting at `start`.
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last index in the group.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether `index` falls inside the group.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

// ---------------------------------------------------------------------------
// FocusCollection
// ---------------------------------------------------------------------------

/// An ordered collection of opaque item handles, optionally partitioned
/// into contiguous groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusCollection<T> {
    items: Vec<T>,
    groups: Vec<Group>,
}

impl<T> FocusCollection<T> {
    /// Create a flat collection: navigation wraps across the whole list.
    #[must_use]
    pub fn flat(items: Vec<T>) -> Self {
        Self {
            items,
            groups: Vec::new(),
        }
    }

    /// Create a grouped collection.
    ///
    /// The groups must partition `items`: contiguous, ascending, and
    /// covering every item exactly once. Anything else is rejected here so
    /// the navigation hot path never has to re-validate.
    pub fn grouped(items: Vec<T>, groups: Vec<Group>) -> Result<Self, CollectionError> {
        let mut expected = 0usize;
        for (i, group) in groups.iter().enumerate() {
            if group.len == 0 {
                return Err(CollectionError::ZeroLengthGroup { group: i });
            }
            if group.start < expected {
                return Err(CollectionError::GroupOverlap {
                    group: i,
                    start: group.start,
                    expected,
                });
            }
            if group.start > expected {
                return Err(CollectionError::GroupGap {
                    group: i,
                    start: group.start,
                    expected,
                });
            }
            expected = group.end();
        }
        if expected != items.len() {
            return Err(CollectionError::UncoveredTail {
                covered: expected,
                items: items.len(),
            });
        }
        Ok(Self { items, groups })
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item handles in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item at `index`, if in range.
    #[must_use = "use the returned item (if any)"]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Whether the collection is partitioned into groups.
    #[inline]
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        !self.groups.is_empty()
    }

    /// The groups, empty for a flat collection.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups (zero for a flat collection).
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Index of the group containing item `index`.
    ///
    /// `None` for flat collections and out-of-range indices.
    #[must_use = "use the returned group index (if any)"]
    pub fn group_of(&self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        // Groups are sorted and contiguous, so a binary search on start
        // would also work; linear is fine for carousel-sized group lists.
        self.groups.iter().position(|g| g.contains(index))
    }

    /// The wrap range active at item `index`: the containing group for a
    /// grouped collection, the whole list for a flat one.
    #[must_use]
    pub fn span_of(&self, index: usize) -> Group {
        match self.group_of(index) {
            Some(g) => self.groups[g],
            None => Group::new(0, self.items.len()),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
