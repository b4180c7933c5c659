#![deny(missing_docs)]

//! Ordered set of integer keys backed by an unbalanced binary search tree, see [`collections::BstSet`].
//!
//! Elements are visited in ascending order, either with a Rust iterator ( [`collections::BstSet::iter`] )
//! or with a bidirectional [`collections::Cursor`] which can step in both directions and be turned into a
//! detached [`collections::Position`] for [`collections::BstSet::erase`].

//!# Features
//!
//! This crate supports the following cargo features:
//! - `cap` : tests report allocated memory using the cap crate.

/// Containers.
pub mod collections;
