#![allow(dead_code)]

//! Shared fixture for the ancestry integration suites
//!
//! Builds a two-root history exercising every interesting shape at once:
//! unrelated roots, a merged orphan branch, a criss-cross merge and a
//! partially merged feature branch.

use ancestry::{AncestryEngine, Commit, InMemoryCommitStore, ObjectId};
use chrono::{DateTime, FixedOffset, TimeZone};
use rstest::fixture;
use std::collections::HashMap;

/// Two-root commit history with named commits
///
/// ```text
/// V---o---M----AB----A---CD1--R---C--------S----------------Q < master
///                \         \ /            /                /
///                 \         X            GQ1---G < feature/
///                  \       / \          /     /           /
/// W---o---N----o----B---CD2---o---D----o----GQ2----------o < dev
/// ```
///
/// The anonymous `o` commits are addressable as `o1`..`o6`, numbered
/// left to right, master line first. Branch names `master`, `feature`
/// and `dev` resolve to their tip commits.
pub struct History {
    store: InMemoryCommitStore,
    names: HashMap<&'static str, ObjectId>,
}

impl History {
    pub fn new() -> Self {
        let mut history = Self {
            store: InMemoryCommitStore::new(),
            names: HashMap::new(),
        };

        // Master line down to the criss-cross.
        history.add("V", &[], 0);
        history.add("o1", &["V"], 2);
        history.add("M", &["o1"], 4);
        history.add("AB", &["M"], 7);
        history.add("A", &["AB"], 9);
        history.add("CD1", &["A"], 11);
        history.add("R", &["CD1", "CD2"], 13);
        history.add("C", &["R"], 15);
        history.add("S", &["C", "GQ1"], 20);
        history.add("Q", &["S", "o6"], 22);

        // Dev line, merged with master at B and criss-crossed at o4.
        history.add("W", &[], 1);
        history.add("o2", &["W"], 3);
        history.add("N", &["o2"], 5);
        history.add("o3", &["N"], 6);
        history.add("B", &["o3", "AB"], 8);
        history.add("CD2", &["B"], 10);
        history.add("o4", &["CD2", "CD1"], 12);
        history.add("D", &["o4"], 14);
        history.add("o5", &["D"], 16);
        history.add("GQ2", &["o5"], 18);
        history.add("o6", &["GQ2"], 21);

        // Feature branch forking from dev and merged once into master.
        history.add("GQ1", &["o5"], 17);
        history.add("G", &["GQ1", "GQ2"], 19);

        history.alias("master", "Q");
        history.alias("feature", "G");
        history.alias("dev", "o6");

        history
    }

    fn add(&mut self, name: &'static str, parents: &[&str], hour: i64) {
        let parents = parents.iter().map(|parent| oid(parent)).collect();
        let commit = Commit::new(oid(name), parents, at_hour(hour));
        self.names.insert(name, commit.oid().clone());
        self.store.insert(commit);
    }

    fn alias(&mut self, name: &'static str, target: &str) {
        let target = self
            .names
            .get(target)
            .unwrap_or_else(|| panic!("unknown alias target {target}"))
            .clone();
        self.names.insert(name, target);
    }

    /// Resolve a commit by its name in the history drawing
    pub fn commit(&self, name: &str) -> Commit {
        let id = self
            .names
            .get(name)
            .unwrap_or_else(|| panic!("unknown commit name {name}"));
        self.store
            .get(id)
            .unwrap_or_else(|| panic!("commit {name} missing from store"))
            .clone()
    }

    /// Resolve the first parent of a commit, as `^` would
    pub fn first_parent(&self, commit: &Commit) -> Commit {
        let parent = commit
            .parents()
            .first()
            .unwrap_or_else(|| panic!("commit {} has no parent", commit.oid()));
        self.store
            .get(parent)
            .unwrap_or_else(|| panic!("parent {parent} missing from store"))
            .clone()
    }

    /// Resolve a list of names into commits
    pub fn commits(&self, names: &[&str]) -> Vec<Commit> {
        names.iter().map(|name| self.commit(name)).collect()
    }

    pub fn engine(&self) -> AncestryEngine<&InMemoryCommitStore> {
        AncestryEngine::new(&self.store)
    }

    pub fn store(&self) -> &InMemoryCommitStore {
        &self.store
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[fixture]
pub fn history() -> History {
    History::new()
}

fn oid(name: &str) -> ObjectId {
    // Deterministic 40-char hex id encoding the readable name.
    let mut hex = String::new();
    for byte in name.as_bytes() {
        hex.push_str(&format!("{:02x}", byte));
    }
    while hex.len() < 40 {
        hex.push('0');
    }
    hex.truncate(40);
    ObjectId::try_parse(hex).expect("invalid test oid")
}

fn at_hour(hour: i64) -> DateTime<FixedOffset> {
    // Hour-spaced timestamps starting from 2022-01-01, consistent with
    // the left-to-right drawing.
    FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(1_640_995_200 + hour * 3600, 0)
        .unwrap()
}

/// Hex identifiers of `commits`, sorted, for order-insensitive comparison
pub fn sorted_hex(commits: &[Commit]) -> Vec<String> {
    let mut hex: Vec<String> = commits.iter().map(|c| c.oid().to_string()).collect();
    hex.sort();
    hex
}
