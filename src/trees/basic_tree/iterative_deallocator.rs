use super::*;

/// Replaces the tree with an empty tree, and releases its nodes one at a time.
///
/// The generated drop code for [`BasicTree`] recurses once per level, and a splay
/// tree can be as deep as it is large. Here every node's subtrees are detached
/// before the node itself is dropped, so no drop ever recurses.
///
/// Takes a reference so that it can be called from `Drop` implementations.
pub fn deallocate_iteratively<K, V>(tree: &mut BasicTree<K, V>) {
    let mut pending: Vec<Box<BasicNode<K, V>>> = tree.take().into_node_boxed().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take().into_node_boxed());
        pending.extend(node.right.take().into_node_boxed());
    }
}
