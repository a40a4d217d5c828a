//! Commit-graph ancestry engine
//!
//! Answers three questions over a DAG of commits linked by parent edges:
//!
//! - [`AncestryEngine::merge_base`]: the best common ancestors of two
//!   commits, handling criss-cross histories with more than one answer
//! - [`AncestryEngine::independents`]: the minimal subset of a commit
//!   list in which no member is reachable from another
//! - [`AncestryEngine::is_ancestor`]: whether one commit is reachable
//!   from another over parent edges
//!
//! Commits are reached through the narrow [`CommitAccessor`] capability
//! ("parents of X", "committer timestamp of X"). Object storage,
//! transports, reference management and revision-expression parsing all
//! live in collaborating layers; this crate only walks the graph.
//!
//! ## Example
//!
//! ```
//! use ancestry::{AncestryEngine, Commit, InMemoryCommitStore, ObjectId};
//! use chrono::{FixedOffset, TimeZone};
//!
//! fn oid(byte: u8) -> ObjectId {
//!     ObjectId::try_parse(format!("{:02x}", byte).repeat(20)).unwrap()
//! }
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let root = Commit::new(oid(1), vec![], utc.timestamp_opt(1_000, 0).unwrap());
//! let left = Commit::new(oid(2), vec![oid(1)], utc.timestamp_opt(2_000, 0).unwrap());
//! let right = Commit::new(oid(3), vec![oid(1)], utc.timestamp_opt(3_000, 0).unwrap());
//!
//! let mut store = InMemoryCommitStore::new();
//! for commit in [&root, &left, &right] {
//!     store.insert(commit.clone());
//! }
//!
//! let engine = AncestryEngine::new(&store);
//! let bases = engine.merge_base(&left, &right)?;
//! assert_eq!(bases, vec![root]);
//! # Ok::<(), ancestry::AncestryError>(())
//! ```

pub mod cancel;
pub mod engine;
pub mod error;
pub mod objects;
pub mod store;
pub mod walk;

pub use cancel::CancelToken;
pub use engine::AncestryEngine;
pub use error::AncestryError;
pub use objects::commit::Commit;
pub use objects::object_id::ObjectId;
pub use store::{CommitAccessor, InMemoryCommitStore};
