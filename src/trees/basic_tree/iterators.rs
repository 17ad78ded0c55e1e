use super::*;

/// Iterator over the key-value pairs of a tree, in increasing key order.
pub struct Iter<'a, K, V> {
    // the nodes whose left subtree was already yielded, or is being yielded
    stack: Vec<&'a BasicNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a BasicTree<K, V>) -> Self {
        let mut res = Iter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a BasicTree<K, V>) {
        while let Some(node) = tree.node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some((&node.key, &node.value))
    }
}

impl<K, V> BasicTree<K, V> {
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }
}

impl<'a, K, V> IntoIterator for &'a BasicTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
