//! The locator module provides an interface for locating a specific node,
//! generalizing the search in a binary search tree.
//!
//! A locator is queried top-down, once per node on a search path, starting at
//! the root. It answers whether the node it is looking for is the current node,
//! or lies in its left or right subtree. Searching by key is the obvious
//! locator, but the splay algorithm also needs to walk to a node by its
//! recorded position, or to the maximum of a subtree, without comparing keys.

use crate::comparator::Comparator;
use crate::trees::Side;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LocResult {
    GoLeft,
    Accept,
    GoRight,
}
use LocResult::*;

impl From<std::cmp::Ordering> for LocResult {
    /// Converts the result of comparing the wanted key to the current key.
    fn from(ord: std::cmp::Ordering) -> Self {
        match ord {
            std::cmp::Ordering::Less => GoLeft,
            std::cmp::Ordering::Equal => Accept,
            std::cmp::Ordering::Greater => GoRight,
        }
    }
}

/// Locators are queried about the nodes of a search path, from the root down.
///
/// A locator may keep state between queries (see [`FollowPath`]), so it must
/// be queried about each node of a single root-to-leaf path at most once,
/// in order from the root down.
pub trait Locator<K> {
    fn locate(&mut self, key: &K) -> LocResult;
}

impl<K, F> Locator<K> for F
where
    F: FnMut(&K) -> LocResult,
{
    fn locate(&mut self, key: &K) -> LocResult {
        self(key)
    }
}

/// Locates the node with the given key, using a comparator.
pub struct ByKey<'a, K, C> {
    key: &'a K,
    comparator: &'a C,
}

impl<'a, K, C: Comparator<K>> ByKey<'a, K, C> {
    pub fn new(key: &'a K, comparator: &'a C) -> Self {
        ByKey { key, comparator }
    }
}

impl<'a, K, C: Comparator<K>> Locator<K> for ByKey<'a, K, C> {
    fn locate(&mut self, key: &K) -> LocResult {
        self.comparator.compare(self.key, key).into()
    }
}

/// Locates the node reached by following a recorded path of sides from the root.
///
/// The answers are the same ones a [`ByKey`] locator would give for that
/// node's key, so a splay can bring a node up by its position alone.
pub struct FollowPath<'a> {
    path: &'a [Side],
    depth: usize,
}

impl<'a> FollowPath<'a> {
    pub fn new(path: &'a [Side]) -> Self {
        FollowPath { path, depth: 0 }
    }
}

impl<'a, K> Locator<K> for FollowPath<'a> {
    fn locate(&mut self, _key: &K) -> LocResult {
        let res = match self.path.get(self.depth) {
            None => Accept,
            Some(Side::Left) => GoLeft,
            Some(Side::Right) => GoRight,
        };
        self.depth += 1;
        res
    }
}

/// Locates the maximum of a tree: always goes right.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rightmost;

impl<K> Locator<K> for Rightmost {
    fn locate(&mut self, _key: &K) -> LocResult {
        GoRight
    }
}
