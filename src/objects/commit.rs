//! Commit record
//!
//! The engine's view of a commit: its identifier, its parent identifiers
//! in commit order, and the committer timestamp. Commits are immutable
//! and content-addressed, so two records with the same identifier are
//! the same commit.
//!
//! The committer timestamp is a heuristic ordering key for graph walks.
//! Result sets never depend on it; skewed clocks only make a walk visit
//! more commits than strictly necessary.

use crate::objects::object_id::ObjectId;
use derive_new::new;

/// A commit as seen by the ancestry engine
///
/// Root commits have no parents, regular commits have one, merge commits
/// have two or more. Parent order is preserved because first-parent
/// semantics matter to callers, even though the engine itself walks all
/// parents alike.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    /// The commit's object ID
    oid: ObjectId,
    /// Parent object IDs, in commit order
    parents: Vec<ObjectId>,
    /// Committer timestamp
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Commit {
    /// Get the commit's object ID
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Get the parent object IDs in commit order
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Get the committer timestamp
    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// True for commits without parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// True for commits with more than one parent
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}
