// This is a private module, so no documentation for it directly.
// instead look for documentation of the `BasicWalker` struct.

use super::*;
use crate::locators::{LocResult, Locator};
use recursive_reference::*;

const NO_VALUE_ERROR: &str = "invariant violated: RecRef can't be empty";

/// This struct implements a walker for the [`BasicTree`] type.
/// It is a struct that has a mutable reference of the tree, and allows you to walk up and down on it.
/// The walker may also be in a position which is the son of a node, but doesn't contain
/// a node by itself, and then it is said to be in an empty position.
///
/// Nodes don't store parent pointers, so the walker keeps the whole stack of
/// ancestors it went through, and the side it took at each of them. The
/// recorded path can be taken out of the walker, and later used to find the
/// same node again (see [`crate::FollowPath`]).
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to dynamically
/// go up and down the tree without upsetting the borrow checker.
pub struct BasicWalker<'a, K, V> {
    /// The telescope, holding references to all the subtrees from the root to the
    /// current position.
    rec_ref: RecRef<'a, BasicTree<K, V>>,

    /// This array holds for every node, whether the next subtree in the walker
    /// is its left son or the right son.
    /// This array is always one shorter than [`BasicWalker::rec_ref`],
    /// because the last node has no son in the walker.
    path: Vec<Side>,
}

impl<'a, K, V> BasicWalker<'a, K, V> {
    pub fn new(tree: &'a mut BasicTree<K, V>) -> BasicWalker<'a, K, V> {
        BasicWalker {
            rec_ref: RecRef::new(tree),
            path: vec![],
        }
    }

    /// Returns true if at the root.
    /// Note: even if you are the root, the root might still be empty.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The root is at depth zero.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn into_path(self) -> Vec<Side> {
        self.path
    }

    pub fn inner_mut(&mut self) -> &mut BasicTree<K, V> {
        &mut *self.rec_ref
    }

    pub fn node(&self) -> Option<&BasicNode<K, V>> {
        self.rec_ref.node()
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<K, V>> {
        self.rec_ref.node_mut()
    }

    /// Goes to the son at the given side.
    /// Returns `Err(())` if at an empty position.
    pub fn go_to(&mut self, side: Side) -> Result<(), ()> {
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| match tree.node_mut() {
            Some(node) => Ok(node.child_mut(side)),
            None => Err(()),
        });
        if res.is_ok() {
            self.path.push(side);
        }
        res
    }

    pub fn go_left(&mut self) -> Result<(), ()> {
        self.go_to(Side::Left)
    }

    /// Goes up to the parent. If successful, returns which son the previous position was.
    /// Returns `Err(())` at the root.
    pub fn go_up(&mut self) -> Result<Side, ()> {
        match self.path.pop() {
            None => Err(()),
            Some(side) => {
                RecRef::pop(&mut self.rec_ref).expect(NO_VALUE_ERROR);
                Ok(side)
            }
        }
    }

    /// Walks down from the current position, following the locator.
    /// Returns `true` if the locator accepted a node, in which case the walker
    /// stays at that node. Otherwise the walker ends at the empty position
    /// the locator led it to, and `false` is returned.
    pub fn search<L: Locator<K>>(&mut self, locator: &mut L) -> bool {
        loop {
            let side = match self.node() {
                None => return false,
                Some(node) => match locator.locate(&node.key) {
                    LocResult::Accept => return true,
                    LocResult::GoLeft => Side::Left,
                    LocResult::GoRight => Side::Right,
                },
            };
            self.go_to(side).expect(NO_VALUE_ERROR);
        }
    }

    /// Takes the current subtree out of the tree, and writes `Empty` instead.
    /// Intended to help writing tree algorithms.
    pub fn take_subtree(&mut self) -> BasicTree<K, V> {
        self.rec_ref.take()
    }

    /// This takes the walker and turns it into a reference to the current position
    pub fn into_ref(self) -> &'a mut BasicTree<K, V> {
        RecRef::into_ref(self.rec_ref)
    }
}
