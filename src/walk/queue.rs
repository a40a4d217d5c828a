//! Newest-first commit queue
//!
//! Graph walks process commits in reverse chronological order. The queue
//! is a max-heap keyed on the committer timestamp; ties fall back to
//! identifier order so pop order is deterministic. Duplicate suppression
//! is the caller's job, via the `QUEUED` mark in the flag store.

use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::objects::object_id::ObjectId;

/// One queued commit: the ordering key plus the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueueEntry {
    timestamp: DateTime<FixedOffset>,
    oid: ObjectId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of commits ordered newest first
///
/// The head is always the queued commit with the largest committer
/// timestamp among the currently enqueued commits.
#[derive(Debug, Default)]
pub struct TimestampQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl TimestampQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, oid: ObjectId, timestamp: DateTime<FixedOffset>) {
        self.heap.push(QueueEntry { timestamp, oid });
    }

    /// Pop the newest queued commit
    pub fn pop(&mut self) -> Option<(ObjectId, DateTime<FixedOffset>)> {
        self.heap.pop().map(|entry| (entry.oid, entry.timestamp))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Timestamp of the newest queued commit, if any
    pub fn peek_max_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.heap.peek().map(|entry| entry.timestamp)
    }

    /// Identifiers currently queued, in no particular order
    ///
    /// Lets the engine scan the remaining frontier, e.g. to stop a walk
    /// once every queued commit is known stale.
    pub fn iter_oids(&self) -> impl Iterator<Item = &ObjectId> {
        self.heap.iter().map(|entry| &entry.oid)
    }
}
