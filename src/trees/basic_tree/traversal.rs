//! Depth-first traversals of a [`BasicTree`].
//!
//! Splay trees can be arbitrarily deep, so the traversals keep their own
//! stack instead of recursing. The visitor receives the key, the value and the
//! depth of every node, where the root is at depth zero.

use super::*;

impl<K, V> BasicTree<K, V> {
    /// Visits each node, then its left subtree, then its right subtree.
    pub fn prefix<F: FnMut(&K, &V, usize)>(&self, mut visitor: F) {
        let mut stack: Vec<(&BasicNode<K, V>, usize)> = vec![];
        if let Some(node) = self.node() {
            stack.push((node, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            visitor(&node.key, &node.value, depth);
            if let Some(right) = node.right.node() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.node() {
                stack.push((left, depth + 1));
            }
        }
    }

    /// Visits the left subtree, then the right subtree, then the node itself.
    pub fn postfix<F: FnMut(&K, &V, usize)>(&self, mut visitor: F) {
        // the flag marks nodes whose subtrees were already pushed
        let mut stack: Vec<(&BasicNode<K, V>, usize, bool)> = vec![];
        if let Some(node) = self.node() {
            stack.push((node, 0, false));
        }
        while let Some((node, depth, expanded)) = stack.pop() {
            if expanded {
                visitor(&node.key, &node.value, depth);
                continue;
            }
            stack.push((node, depth, true));
            if let Some(right) = node.right.node() {
                stack.push((right, depth + 1, false));
            }
            if let Some(left) = node.left.node() {
                stack.push((left, depth + 1, false));
            }
        }
    }

    /// Visits the left subtree, then the node, then the right subtree.
    /// This visits the keys in increasing order.
    pub fn infix<F: FnMut(&K, &V, usize)>(&self, mut visitor: F) {
        let mut stack: Vec<(&BasicNode<K, V>, usize)> = vec![];
        let mut tree = self;
        let mut depth = 0;
        loop {
            while let Some(node) = tree.node() {
                stack.push((node, depth));
                tree = &node.left;
                depth += 1;
            }
            let (node, node_depth) = match stack.pop() {
                None => return,
                Some(frame) => frame,
            };
            visitor(&node.key, &node.value, node_depth);
            tree = &node.right;
            depth = node_depth + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    //        5
    //      3   8
    //     1 4   9
    fn sample() -> BasicTree<i32, char> {
        let mut tree = BasicTree::new();
        for (k, v) in [(5, 'e'), (3, 'c'), (8, 'h'), (1, 'a'), (4, 'd'), (9, 'i')].iter() {
            tree.insert_by(*k, *v, &NaturalOrder).unwrap();
        }
        tree
    }

    fn collect<F>(traverse: F) -> Vec<(i32, char, usize)>
    where
        F: FnOnce(&mut dyn FnMut(&i32, &char, usize)),
    {
        let mut res = vec![];
        traverse(&mut |k, v, d| res.push((*k, *v, d)));
        res
    }

    #[test]
    fn prefix_order() {
        let tree = sample();
        let res = collect(|f| tree.prefix(f));
        assert_eq!(
            res,
            vec![
                (5, 'e', 0),
                (3, 'c', 1),
                (1, 'a', 2),
                (4, 'd', 2),
                (8, 'h', 1),
                (9, 'i', 2)
            ]
        );
    }

    #[test]
    fn postfix_order() {
        let tree = sample();
        let keys: Vec<_> = collect(|f| tree.postfix(f)).into_iter().map(|x| x.0).collect();
        assert_eq!(keys, vec![1, 4, 3, 9, 8, 5]);
    }

    #[test]
    fn infix_order_and_depths() {
        let tree = sample();
        let res: Vec<_> = collect(|f| tree.infix(f))
            .into_iter()
            .map(|(k, _, d)| (k, d))
            .collect();
        assert_eq!(res, vec![(1, 2), (3, 1), (4, 2), (5, 0), (8, 1), (9, 2)]);
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let tree: BasicTree<i32, char> = BasicTree::new();
        assert!(collect(|f| tree.prefix(f)).is_empty());
        assert!(collect(|f| tree.postfix(f)).is_empty());
        assert!(collect(|f| tree.infix(f)).is_empty());
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        // a single long right spine
        let mut tree = BasicTree::new();
        for x in (0..100_000).rev() {
            let mut node = BasicNode::new(x, ());
            node.right = tree;
            tree = BasicTree::from_node(node);
        }
        let mut count = 0;
        tree.infix(|_, _, _| count += 1);
        assert_eq!(count, 100_000);
        deallocate_iteratively(&mut tree);
    }
}
