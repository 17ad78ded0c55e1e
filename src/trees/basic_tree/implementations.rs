//! The plain binary search tree algorithms for [`BasicTree`]: search, insertion and removal.
//! Tree types with a balancing strategy reuse these unmodified, and only add
//! work after them.

use super::*;
use crate::comparator::Comparator;
use crate::locators::{ByKey, LocResult, Locator};

impl<K, V> BasicTree<K, V> {
    pub fn walker(&mut self) -> BasicWalker<'_, K, V> {
        BasicWalker::new(self)
    }

    /// Finds the node the locator accepts, without changing the tree.
    pub fn search<L: Locator<K>>(&self, mut locator: L) -> Option<&BasicNode<K, V>> {
        let mut tree = self;
        while let Some(node) = tree.node() {
            tree = match locator.locate(&node.key) {
                LocResult::Accept => return Some(node),
                LocResult::GoLeft => &node.left,
                LocResult::GoRight => &node.right,
            };
        }
        None
    }

    pub fn search_mut<L: Locator<K>>(&mut self, mut locator: L) -> Option<&mut BasicNode<K, V>> {
        let mut walker = self.walker();
        if !walker.search(&mut locator) {
            return None;
        }
        walker.into_ref().node_mut()
    }

    /// Returns the sides to take from the root in order to get to the node the
    /// locator accepts, without changing the tree.
    /// Returns [`None`] if no node was accepted.
    pub fn search_path<L: Locator<K>>(&self, mut locator: L) -> Option<Vec<Side>> {
        let mut path = vec![];
        let mut tree = self;
        while let Some(node) = tree.node() {
            let side = match locator.locate(&node.key) {
                LocResult::Accept => return Some(path),
                LocResult::GoLeft => Side::Left,
                LocResult::GoRight => Side::Right,
            };
            path.push(side);
            tree = node.child(side);
        }
        None
    }

    /// Inserts a new node with the given key and value as a leaf.
    ///
    /// If an equal key already exists, the tree is left unmodified and the key and value
    /// are given back in `Err`. Otherwise returns the path from the root to the new node.
    pub fn insert_by<C: Comparator<K>>(
        &mut self,
        key: K,
        value: V,
        comparator: &C,
    ) -> Result<Vec<Side>, (K, V)> {
        let mut walker = self.walker();
        if walker.search(&mut ByKey::new(&key, comparator)) {
            return Err((key, value));
        }
        *walker.inner_mut() = BasicTree::from_node(BasicNode::new(key, value));
        log::trace!("attached a new leaf at depth {}", walker.depth());
        Ok(walker.into_path())
    }

    /// Removes the node with the given key, and returns its key and value.
    /// Returns [`None`] and leaves the tree unmodified if the key isn't present.
    ///
    /// A node with at most one son is replaced by that son.
    /// A node with two sons stays in place, and receives the key and value of its
    /// in-order successor instead. The successor node, which has no left son,
    /// is the one that gets detached, and its right son takes its place.
    pub fn remove_by<C: Comparator<K>>(&mut self, key: &K, comparator: &C) -> Option<(K, V)> {
        let mut walker = self.walker();
        if !walker.search(&mut ByKey::new(key, comparator)) {
            return None;
        }

        let node = walker.node_mut()?;
        if !node.left.is_empty() && !node.right.is_empty() {
            let mut successor = node.right.take_leftmost()?;
            std::mem::swap(&mut node.key, &mut successor.key);
            std::mem::swap(&mut node.value, &mut successor.value);
            log::trace!(
                "removed a node with two sons at depth {} through its successor",
                walker.depth()
            );
            return Some((*successor).into_entry());
        }

        let mut node = walker.take_subtree().into_node_boxed()?;
        *walker.inner_mut() = if node.left.is_empty() {
            node.right.take()
        } else {
            node.left.take()
        };
        Some((*node).into_entry())
    }

    /// Detaches the node with the minimal key. Its right son takes its place.
    pub fn take_leftmost(&mut self) -> Option<Box<BasicNode<K, V>>> {
        let mut walker = self.walker();
        while let Ok(_) = walker.go_left() {}
        walker.go_up().ok()?;

        let mut node = walker.take_subtree().into_node_boxed()?;
        *walker.inner_mut() = node.right.take();
        Some(node)
    }

    /// Checks that the keys are strictly increasing in order.
    /// If they are not, panics.
    pub fn assert_ordered<C: Comparator<K>>(&self, comparator: &C) {
        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(prev) = prev {
                assert!(
                    comparator.compare(prev, key) == std::cmp::Ordering::Less,
                    "binary search tree order violated"
                );
            }
            prev = Some(key);
        }
    }
}
