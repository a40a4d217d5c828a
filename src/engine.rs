//! Ancestry queries over the commit graph
//!
//! This module implements the three public operations of the crate:
//!
//! - `merge_base`: all best common ancestors of two commits
//! - `independents`: the subset of a commit list in which no member is
//!   reachable from another
//! - `is_ancestor`: reachability between two commits
//!
//! ## Algorithm overview
//!
//! All three operations share one traversal shape: seed a newest-first
//! timestamp queue, pop, inspect and update the popped commit's marks,
//! and enqueue its parents. A commit enters the queue at most once; when
//! another path reaches it later, the new reachability bits are OR-ed
//! into its flag word instead.
//!
//! For merge bases the walk paints commits with `PARENT1` and `PARENT2`.
//! A commit seen from both sides becomes a tentative result, and from
//! that point on only `STALE` propagates to its ancestry: an ancestor of
//! a merge base can never be a best common ancestor itself. The walk
//! stops when the queue drains or every queued commit is known stale,
//! and criss-cross histories naturally keep two or more results alive.
//!
//! Committer timestamps order the walk but never decide the result set;
//! skewed clocks cost extra visits, not wrong answers.
//!
//! ## Debug logging
//!
//! With the `debug_walk` cargo feature the walks trace every pop to
//! stderr. The feature is off by default and the engine then emits
//! nothing at all.

use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

use crate::cancel::CancelToken;
use crate::error::AncestryError;
use crate::objects::commit::Commit;
use crate::objects::object_id::ObjectId;
use crate::store::CommitAccessor;
use crate::walk::flags::{FlagStore, WalkFlags};
use crate::walk::queue::TimestampQueue;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Ancestry engine over a commit accessor
///
/// Each public operation is self-contained: it allocates its own flag
/// store and timestamp queue, owns them exclusively and drops them on
/// return. Concurrent calls on one engine are safe whenever the
/// accessor supports concurrent reads.
#[derive(Debug, Clone)]
pub struct AncestryEngine<A: CommitAccessor> {
    accessor: A,
    cancel: Option<CancelToken>,
}

impl<A: CommitAccessor> AncestryEngine<A> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            cancel: None,
        }
    }

    /// Create an engine whose walks poll `token` at every queue pop
    ///
    /// A cancelled token makes the running operation fail with
    /// `AncestryError::Cancelled`; transient walk state is discarded.
    pub fn with_cancel_token(accessor: A, token: CancelToken) -> Self {
        Self {
            accessor,
            cancel: Some(token),
        }
    }

    /// Find all best common ancestors of `a` and `b`
    ///
    /// A best common ancestor is a common ancestor that is not itself an
    /// ancestor of another common ancestor. Unrelated commits produce an
    /// empty set; criss-cross merges produce more than one commit. The
    /// result is unordered.
    ///
    /// # Arguments
    ///
    /// * `a` - First commit, painted `PARENT1`
    /// * `b` - Second commit, painted `PARENT2`
    pub fn merge_base(&self, a: &Commit, b: &Commit) -> Result<Vec<Commit>, AncestryError> {
        if a.oid() == b.oid() {
            return Ok(vec![a.clone()]);
        }

        let mut flags = FlagStore::new();
        let mut queue = TimestampQueue::new();

        flags.set(a.oid(), WalkFlags::PARENT1 | WalkFlags::QUEUED);
        queue.push(a.oid().clone(), a.timestamp());
        flags.set(b.oid(), WalkFlags::PARENT2 | WalkFlags::QUEUED);
        queue.push(b.oid().clone(), b.timestamp());

        let mut results: Vec<ObjectId> = Vec::new();

        while let Some((oid, _)) = queue.pop() {
            self.poll_cancelled()?;

            let mut inherit =
                flags.get(&oid) & (WalkFlags::PARENT1 | WalkFlags::PARENT2 | WalkFlags::STALE);
            debug_log!("pop {}: {}", oid.to_short_oid(), inherit);

            if inherit == (WalkFlags::PARENT1 | WalkFlags::PARENT2) {
                // Reached from both sides and not stale: tentative merge base.
                if !flags.test(&oid, WalkFlags::RESULT) {
                    flags.set(&oid, WalkFlags::RESULT);
                    results.push(oid.clone());
                }
                // Its ancestry can no longer contain a best answer.
                inherit = WalkFlags::STALE;
            } else if inherit.contains(WalkFlags::STALE) {
                // Staleness dominates the reachability bits.
                inherit = WalkFlags::STALE;
            }

            for parent_oid in self.accessor.parents(&oid)? {
                let previous = flags.get(&parent_oid);
                if previous.contains(inherit) {
                    continue; // nothing new to propagate
                }
                flags.set(&parent_oid, inherit);
                if !previous.contains(WalkFlags::QUEUED) {
                    flags.set(&parent_oid, WalkFlags::QUEUED);
                    let timestamp = self.accessor.committer_timestamp(&parent_oid)?;
                    queue.push(parent_oid, timestamp);
                }
            }

            // Once every queued commit is stale no new result can appear.
            if !queue.is_empty() && queue.iter_oids().all(|id| flags.test(id, WalkFlags::STALE)) {
                debug_log!("frontier fully stale, stopping early");
                break;
            }
        }

        let mut bases = Vec::with_capacity(results.len());
        for oid in results {
            if !flags.test(&oid, WalkFlags::STALE) {
                bases.push(self.load_commit(&oid)?);
            }
        }
        Ok(bases)
    }

    /// Reduce `commits` to the members not reachable from one another
    ///
    /// Repeated identifiers are collapsed before walking; of the
    /// survivors, every input commit is either returned or has a proper
    /// descendant among the returned commits. Input order is preserved.
    pub fn independents(&self, commits: &[Commit]) -> Result<Vec<Commit>, AncestryError> {
        let mut candidates: Vec<Commit> = Vec::new();
        let mut candidate_oids: HashSet<ObjectId> = HashSet::new();
        for commit in commits {
            if candidate_oids.insert(commit.oid().clone()) {
                candidates.push(commit.clone());
            }
        }
        if candidates.len() <= 1 {
            return Ok(candidates);
        }

        let mut flags = FlagStore::new();
        let mut queue = TimestampQueue::new();
        for candidate in &candidates {
            flags.set(candidate.oid(), WalkFlags::QUEUED);
            queue.push(candidate.oid().clone(), candidate.timestamp());
        }

        loop {
            let mut live = 0usize;
            let mut oldest_live: Option<DateTime<FixedOffset>> = None;
            for candidate in &candidates {
                if flags.test(candidate.oid(), WalkFlags::STALE) {
                    continue;
                }
                live += 1;
                oldest_live = Some(match oldest_live {
                    Some(current) if current <= candidate.timestamp() => current,
                    _ => candidate.timestamp(),
                });
            }
            // A single survivor cannot be eliminated by anyone.
            if live < 2 {
                break;
            }
            // Everything still queued is strictly older than every live
            // candidate: no further elimination is possible. This is the
            // only permissible shortcut; stopping at the first hit would
            // miss candidates reachable over other, older paths.
            match (queue.peek_max_timestamp(), oldest_live) {
                (None, _) => break,
                (Some(newest), Some(oldest)) if newest < oldest => break,
                _ => {}
            }

            let Some((oid, _)) = queue.pop() else {
                break;
            };
            self.poll_cancelled()?;
            debug_log!("pop {}: {}", oid.to_short_oid(), flags.get(&oid));

            for parent_oid in self.accessor.parents(&oid)? {
                if candidate_oids.contains(&parent_oid)
                    && !flags.test(&parent_oid, WalkFlags::STALE)
                {
                    // A candidate reachable from another commit in the
                    // walk is an ancestor of some candidate: not independent.
                    flags.set(&parent_oid, WalkFlags::STALE);
                }
                if !flags.test(&parent_oid, WalkFlags::QUEUED) {
                    flags.set(&parent_oid, WalkFlags::QUEUED);
                    let timestamp = self.accessor.committer_timestamp(&parent_oid)?;
                    queue.push(parent_oid, timestamp);
                }
            }
        }

        Ok(candidates
            .into_iter()
            .filter(|candidate| !flags.test(candidate.oid(), WalkFlags::STALE))
            .collect())
    }

    /// True when `ancestor` is reachable from `descendant`
    ///
    /// Reachability is inclusive: a commit is an ancestor of itself. The
    /// walk descends newest first from `descendant` and gives up as soon
    /// as the whole frontier is strictly older than `ancestor`, since a
    /// max-heap head older than the target proves nothing newer remains.
    pub fn is_ancestor(&self, ancestor: &Commit, descendant: &Commit) -> Result<bool, AncestryError> {
        if ancestor.oid() == descendant.oid() {
            return Ok(true);
        }

        let mut flags = FlagStore::new();
        let mut queue = TimestampQueue::new();
        flags.set(descendant.oid(), WalkFlags::QUEUED);
        queue.push(descendant.oid().clone(), descendant.timestamp());

        while let Some((oid, timestamp)) = queue.pop() {
            self.poll_cancelled()?;
            debug_log!("pop {}", oid.to_short_oid());

            if &oid == ancestor.oid() {
                return Ok(true);
            }
            if timestamp < ancestor.timestamp() {
                return Ok(false);
            }

            for parent_oid in self.accessor.parents(&oid)? {
                if flags.test(&parent_oid, WalkFlags::QUEUED) {
                    continue;
                }
                flags.set(&parent_oid, WalkFlags::QUEUED);
                let parent_timestamp = self.accessor.committer_timestamp(&parent_oid)?;
                queue.push(parent_oid, parent_timestamp);
            }
        }
        Ok(false)
    }

    fn poll_cancelled(&self) -> Result<(), AncestryError> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(AncestryError::Cancelled),
            _ => Ok(()),
        }
    }

    fn load_commit(&self, oid: &ObjectId) -> Result<Commit, AncestryError> {
        let parents = self.accessor.parents(oid)?;
        let timestamp = self.accessor.committer_timestamp(oid)?;
        Ok(Commit::new(oid.clone(), parents, timestamp))
    }
}
