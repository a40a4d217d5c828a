//! Commit lookup capability
//!
//! The engine reaches the graph through a two-method capability: the
//! parents of an identifier and its committer timestamp. Implementations
//! may back onto loose objects, packfiles or plain memory. The engine
//! never caches lookups beyond the running traversal, so an accessor
//! over slow storage should cache on its own side.

use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

use crate::error::AncestryError;
use crate::objects::commit::Commit;
use crate::objects::object_id::ObjectId;

/// Capability to look up commit data by identifier
///
/// All methods take `&self`; concurrent engine calls are safe whenever
/// the accessor supports concurrent reads.
pub trait CommitAccessor {
    /// Parent identifiers of `oid`, in commit order
    ///
    /// Fails with `ObjectNotFound` for identifiers the backing store
    /// cannot supply, and with `Io` on storage failure.
    fn parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, AncestryError>;

    /// Committer timestamp of `oid`
    fn committer_timestamp(&self, oid: &ObjectId) -> Result<DateTime<FixedOffset>, AncestryError>;
}

impl<T: CommitAccessor + ?Sized> CommitAccessor for &T {
    fn parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, AncestryError> {
        (**self).parents(oid)
    }

    fn committer_timestamp(&self, oid: &ObjectId) -> Result<DateTime<FixedOffset>, AncestryError> {
        (**self).committer_timestamp(oid)
    }
}

/// In-memory commit store
///
/// Reference accessor backed by a hash map, used by the test suites and
/// handy for callers that already hold the relevant slice of history in
/// memory. Unknown identifiers produce `ObjectNotFound`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommitStore {
    commits: HashMap<ObjectId, Commit>,
}

impl InMemoryCommitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit, replacing any previous record with the same ID
    pub fn insert(&mut self, commit: Commit) {
        self.commits.insert(commit.oid().clone(), commit);
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl CommitAccessor for InMemoryCommitStore {
    fn parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, AncestryError> {
        self.commits
            .get(oid)
            .map(|commit| commit.parents().to_vec())
            .ok_or_else(|| AncestryError::ObjectNotFound(oid.clone()))
    }

    fn committer_timestamp(&self, oid: &ObjectId) -> Result<DateTime<FixedOffset>, AncestryError> {
        self.commits
            .get(oid)
            .map(Commit::timestamp)
            .ok_or_else(|| AncestryError::ObjectNotFound(oid.clone()))
    }
}
