//! The basic tree module
//! This module implements basic unbalanced binary search trees: the nodes,
//! the rotation primitives, a walker, and the plain search, insertion and
//! removal algorithms that every tree type in this crate is built on.

// these should not be public as they are merely separate files
// for some of the functions of this module
mod implementations;
mod iterative_deallocator;
mod iterators;
mod traversal;
mod walker;

pub use iterative_deallocator::*;
pub use iterators::*;
pub use walker::*;

use super::Side;

/// A basic tree. might be empty.
pub enum BasicTree<K, V> {
    Empty,
    Root(Box<BasicNode<K, V>>),
}
use BasicTree::*;

/// A basic node. can be viewed as a non-empty basic tree: it always has a key and a value.
/// Every node exclusively owns its two subtrees.
pub struct BasicNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: BasicTree<K, V>,
    pub(crate) right: BasicTree<K, V>,
}

impl<K, V> BasicNode<K, V> {
    pub fn new(key: K, value: V) -> BasicNode<K, V> {
        BasicNode {
            key,
            value,
            left: Empty,
            right: Empty,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn left(&self) -> &BasicTree<K, V> {
        &self.left
    }

    pub fn right(&self) -> &BasicTree<K, V> {
        &self.right
    }

    pub fn child(&self, side: Side) -> &BasicTree<K, V> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut BasicTree<K, V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Discards the subtrees and returns the key and value.
    /// Only call this once the subtrees have been moved elsewhere.
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> BasicTree<K, V> {
    pub fn new() -> Self {
        Empty
    }

    pub fn from_node(node: BasicNode<K, V>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&BasicNode<K, V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<K, V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn into_node_boxed(self) -> Option<Box<BasicNode<K, V>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Takes the tree out, leaving an empty tree in its place.
    pub fn take(&mut self) -> BasicTree<K, V> {
        std::mem::replace(self, Empty)
    }

    /// Returns the key at the root.
    pub fn key(&self) -> Option<&K> {
        Some(&self.node()?.key)
    }

    /// Performs a right rotation: the left son becomes the root of this subtree,
    /// and the old root becomes its right son.
    /// Returns [`None`] and leaves the tree untouched if this is an empty tree
    /// or if it has no left son.
    pub fn rot_right(&mut self) -> Option<()> {
        let p_node = self.node_mut()?;
        let mut q_node = p_node.left.take().into_node_boxed()?;
        p_node.left = q_node.right.take();
        q_node.right = self.take();
        *self = Root(q_node);
        Some(())
    }

    /// Performs a left rotation: the right son becomes the root of this subtree,
    /// and the old root becomes its left son.
    /// Returns [`None`] and leaves the tree untouched if this is an empty tree
    /// or if it has no right son.
    pub fn rot_left(&mut self) -> Option<()> {
        let p_node = self.node_mut()?;
        let mut q_node = p_node.right.take().into_node_boxed()?;
        p_node.right = q_node.left.take();
        q_node.left = self.take();
        *self = Root(q_node);
        Some(())
    }

    /// Performs rot_left if `side` is [`Side::Left`]
    /// rot_right otherwise
    pub fn rot_side(&mut self, side: Side) -> Option<()> {
        match side {
            Side::Left => self.rot_left(),
            Side::Right => self.rot_right(),
        }
    }

    /// Returns the number of levels in the tree. The empty tree has depth `0`,
    /// and a single node has depth `1`.
    pub fn depth(&self) -> usize {
        let mut res = 0;
        self.prefix(|_, _, depth| res = std::cmp::max(res, depth + 1));
        res
    }

    /// Counts the nodes of the tree. Takes linear time.
    pub fn count(&self) -> usize {
        let mut res = 0;
        self.prefix(|_, _, _| res += 1);
        res
    }
}

impl<K, V> Default for BasicTree<K, V> {
    fn default() -> Self {
        Empty
    }
}
