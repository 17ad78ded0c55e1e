//! This module contains the generic tree engine, and the tree types built on it.
//!
//! The engine is [`OrderedTree`]. It always runs the plain binary search tree
//! algorithms from [`basic_tree`], and lets a [`TreeHooks`] strategy post-process
//! every successful operation. The strategy is a type parameter, chosen when
//! the tree is constructed.

pub mod basic_tree;
pub mod ordered_tree;
pub mod splay;

pub use basic_tree::*;
pub use ordered_tree::*;
pub use splay::*;

use crate::comparator::Comparator;

/// Used to say which son of a node we are talking about.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The extension point of [`OrderedTree`].
///
/// The engine performs the plain search, insertion and removal itself, and
/// then calls the matching hook. All hooks do nothing by default, which gives
/// a plain unbalanced binary search tree (see [`PlainHooks`]).
///
/// Hooks that restructure the tree must keep the binary search tree order,
/// and must keep every node in the tree.
///
/// The accessed node is passed to `post_find` and `post_insert` as its path
/// from the root, since nodes have no identity other than their position.
pub trait TreeHooks<K, V> {
    /// Called after `find` successfully located the node at `path`.
    fn post_find(&self, _tree: &mut BasicTree<K, V>, _path: &[Side]) {}

    /// Called after `insert` attached a new node at `path`.
    fn post_insert(&self, _tree: &mut BasicTree<K, V>, _path: &[Side]) {}

    /// Called after `remove` successfully removed a node.
    fn post_remove(&self, _tree: &mut BasicTree<K, V>) {}

    /// Removes the node with the given key from the tree, and returns its key and value.
    /// Must return [`None`] and leave the tree untouched when the key isn't present.
    ///
    /// Defaults to [`BasicTree::remove_by`]. Strategies whose removal is structurally
    /// different may replace it altogether.
    fn remove<C: Comparator<K>>(
        &self,
        tree: &mut BasicTree<K, V>,
        key: &K,
        comparator: &C,
    ) -> Option<(K, V)> {
        tree.remove_by(key, comparator)
    }
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainHooks;

impl<K, V> TreeHooks<K, V> for PlainHooks {}
