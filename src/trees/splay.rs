//! An implementation of splay trees.
//!
//! After every successful access or insertion, the touched node is splayed:
//! it is rotated up, two levels at a time, until it becomes the root of the tree.
//! This gives amortized `O(log n)` time per operation without storing any
//! balancing data in the nodes.
//!
//! Removal splays the removed node to the root, cuts it out, and merges its
//! two subtrees back together.

use super::*;
use crate::comparator::{Comparator, NaturalOrder};
use crate::locators::{ByKey, FollowPath, Locator, Rightmost};

const MISSING_SON: &str = "invariant violated: rotation needs a son that went missing";
const MISSING_PARENT: &str = "invariant violated: the walker lost its path to the root";
const MISSING_ROOT: &str = "invariant violated: the splayed node went missing";

/// A splay tree. See the [module documentation](self).
///
///```
/// use arbor::*;
///
/// let mut tree: SplayTree<i32, &str> = SplayTree::new();
/// for (k, v) in vec![(8, "008"), (7, "007"), (6, "006"), (5, "005")] {
///     tree.insert(k, v).unwrap();
/// }
/// assert_eq!(tree.root(), Some((&5, &"005")));
///
/// assert_eq!(tree.find(&7), Ok(&"007"));
/// assert_eq!(tree.root(), Some((&7, &"007")));
///
/// assert_eq!(tree.remove(&7), Ok("007"));
/// assert_eq!(tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![5, 6, 8]);
///```
pub type SplayTree<K, V, C = NaturalOrder> = OrderedTree<K, V, C, SplayHooks>;

/// The hooks that turn an [`OrderedTree`] into a splay tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplayHooks;

impl<K, V> TreeHooks<K, V> for SplayHooks {
    fn post_find(&self, tree: &mut BasicTree<K, V>, path: &[Side]) {
        log::trace!("splaying found node from depth {}", path.len());
        splay(tree, &mut FollowPath::new(path));
    }

    fn post_insert(&self, tree: &mut BasicTree<K, V>, path: &[Side]) {
        log::trace!("splaying inserted node from depth {}", path.len());
        splay(tree, &mut FollowPath::new(path));
    }

    /// Splays the node to the root, splits it off from its left subtree,
    /// releases it, and merges the two remaining subtrees.
    fn remove<C: Comparator<K>>(
        &self,
        tree: &mut BasicTree<K, V>,
        key: &K,
        comparator: &C,
    ) -> Option<(K, V)> {
        // fail before touching the tree
        tree.search(ByKey::new(key, comparator))?;

        splay(tree, &mut ByKey::new(key, comparator));
        let (right, left) = split(tree.take());
        let mut node = right.into_node_boxed().expect(MISSING_ROOT);
        let surviving_right = node.right.take();
        *tree = merge(surviving_right, left);
        Some((*node).into_entry())
    }
}

/// Restructures the tree so that the node the locator accepts becomes the root.
/// If the locator accepts no node, the last node on its search path becomes the root instead.
///
/// The walker first goes down to the target, querying the locator once per node.
/// Then the target goes back up two levels at a time, with a zig-zig or zig-zag
/// pair of rotations. The levels are paired from the root down, so when the target
/// is at an odd depth, its first step is a single rotation with its parent.
/// This gives the same shapes as the recursive top-down formulation,
/// without recursing once per level.
pub fn splay<K, V, L: Locator<K>>(tree: &mut BasicTree<K, V>, locator: &mut L) {
    let mut walker = tree.walker();
    if !walker.search(locator) {
        // the nearest node is the parent of the empty position
        if walker.go_up().is_err() {
            return;
        }
    }
    log::trace!("splaying from depth {}", walker.depth());

    // zig
    if walker.depth() % 2 == 1 {
        let side = walker.go_up().expect(MISSING_PARENT);
        walker.inner_mut().rot_side(side.flip()).expect(MISSING_SON);
    }

    while !walker.is_root() {
        let lower = walker.go_up().expect(MISSING_PARENT);
        let upper = walker.go_up().expect(MISSING_PARENT);
        if upper == lower {
            // zig-zig
            walker.inner_mut().rot_side(upper.flip()).expect(MISSING_SON);
            walker.inner_mut().rot_side(upper.flip()).expect(MISSING_SON);
        } else {
            // zig-zag
            let parent = walker.node_mut().expect(MISSING_SON).child_mut(upper);
            parent.rot_side(lower.flip()).expect(MISSING_SON);
            walker.inner_mut().rot_side(upper.flip()).expect(MISSING_SON);
        }
    }
}

/// Splits a tree at its root.
/// Returns `(right, left)`: `right` is the root node with its left subtree detached,
/// and `left` is that left subtree. Every key in `left` is smaller than every key in `right`.
pub fn split<K, V>(tree: BasicTree<K, V>) -> (BasicTree<K, V>, BasicTree<K, V>) {
    match tree.into_node_boxed() {
        None => (BasicTree::Empty, BasicTree::Empty),
        Some(mut node) => {
            let left = node.left.take();
            (BasicTree::Root(node), left)
        }
    }
}

/// Merges two trees, where every key in `left` is smaller than every key in `right`.
///
/// The maximum of `left` is splayed to its root, where it has no right son,
/// and `right` is attached there. If `left` is empty, returns `right`.
pub fn merge<K, V>(right: BasicTree<K, V>, mut left: BasicTree<K, V>) -> BasicTree<K, V> {
    if left.is_empty() {
        return right;
    }
    splay(&mut left, &mut Rightmost);
    if let Some(max) = left.node_mut() {
        debug_assert!(max.right.is_empty());
        max.right = right;
    }
    left
}
