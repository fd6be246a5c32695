//! Reconstructs a forest from flat, parent-pointer-only records and assigns
//! every node a compact, human-readable **lineage chain**: a short string
//! drawn from a configurable alphabet, unique among siblings and stable
//! across recomputations.
//!
//! A child's chain is its parent's chain with one or more extra alphabet
//! symbols appended, so a chain doubles as a path from the forest's roots.
//! Re-running [`Group::calculate_hierarchy`] on the same data is
//! idempotent: chains that are still legal and still the right width are
//! preserved rather than reassigned, which keeps churn for downstream
//! consumers to a minimum.
//!
//! # Quick start
//!
//! ```
//! use lineage_engine::{Alphabet, Group, HierarchyNode, Record, NIL};
//!
//! let alphabet = Alphabet::new(('a'..='z').collect::<Vec<_>>()).unwrap();
//! let mut group: Group<Record> = Group::new(alphabet);
//! group.insert(Record::new(1, NIL)); // root
//! group.insert(Record::new(2, 1)); // child of 1
//! group.insert(Record::new(3, 1)); // child of 1
//!
//! group.calculate_hierarchy();
//!
//! assert_eq!(group.get(1).unwrap().chain(), "a");
//! assert!(group.get(2).unwrap().chain().starts_with('a'));
//! assert_ne!(group.get(2).unwrap().chain(), group.get(3).unwrap().chain());
//! ```
//!
//! # Scope
//!
//! This crate is the hierarchy engine only: an in-memory algorithm over a
//! materialized [`Group`] of nodes. It does not read alphabets from files,
//! talk to any external store, or retry — malformed input (an off-alphabet
//! pre-existing chain, an orphaned parent reference) is absorbed silently
//! rather than surfaced, because the engine is meant to run as a
//! convergence step over data of uncertain quality. See
//! [`Group::calculate_hierarchy`] for the one entry point and
//! [`ConfigError`] for the only runtime-observable failure (alphabet
//! configuration).

#![warn(missing_docs)]

mod alphabet;
mod build;
mod error;
mod group;
mod node;

pub use alphabet::Alphabet;
pub use error::ConfigError;
pub use group::Group;
pub use node::{HierarchyNode, Nid, Record, NIL};
