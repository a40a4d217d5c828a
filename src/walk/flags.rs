//! Per-traversal commit marks
//!
//! Each graph walk attaches a small bitset to every commit it touches.
//! Bits are only ever added while a walk runs; a `RESULT` mark may later
//! be superseded by `STALE`, in which case the commit stays a candidate
//! internally but is filtered from the output.

use bitflags::bitflags;
use std::collections::HashMap;
use std::fmt;

use crate::objects::object_id::ObjectId;

bitflags! {
    /// Marks attached to a commit during one traversal.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WalkFlags: u8 {
        /// Reachable from the first input commit.
        const PARENT1 = 1 << 0;
        /// Reachable from the second input commit.
        const PARENT2 = 1 << 1;
        /// Known ancestor of an already-identified result; never a best answer.
        const STALE = 1 << 2;
        /// Tentative member of the result set.
        const RESULT = 1 << 3;
        /// Has entered the queue once; later discoveries only OR in new bits.
        const QUEUED = 1 << 4;
    }
}

impl fmt::Debug for WalkFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(WalkFlags::PARENT1) {
            names.push("PARENT1");
        }
        if self.contains(WalkFlags::PARENT2) {
            names.push("PARENT2");
        }
        if self.contains(WalkFlags::STALE) {
            names.push("STALE");
        }
        if self.contains(WalkFlags::RESULT) {
            names.push("RESULT");
        }
        if self.contains(WalkFlags::QUEUED) {
            names.push("QUEUED");
        }
        if names.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

impl fmt::Display for WalkFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Mapping from commit identifier to marks for one traversal
///
/// Memory is bounded by the number of distinct commits the walk visits.
#[derive(Debug, Default)]
pub struct FlagStore {
    flags: HashMap<ObjectId, WalkFlags>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current marks for `oid`, empty if never marked
    pub fn get(&self, oid: &ObjectId) -> WalkFlags {
        self.flags.get(oid).copied().unwrap_or(WalkFlags::empty())
    }

    /// OR `mask` into the marks for `oid`
    ///
    /// # Returns
    ///
    /// The marks as they were before this call
    pub fn set(&mut self, oid: &ObjectId, mask: WalkFlags) -> WalkFlags {
        let entry = self.flags.entry(oid.clone()).or_insert(WalkFlags::empty());
        let previous = *entry;
        entry.insert(mask);
        previous
    }

    /// True when every bit of `mask` is already set for `oid`
    pub fn test(&self, oid: &ObjectId, mask: WalkFlags) -> bool {
        self.get(oid).contains(mask)
    }

    /// Remove the bits of `mask` from the marks for `oid`
    pub fn clear(&mut self, oid: &ObjectId, mask: WalkFlags) {
        if let Some(entry) = self.flags.get_mut(oid) {
            entry.remove(mask);
        }
    }

    /// Number of commits carrying at least one mark
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
