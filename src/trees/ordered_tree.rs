//! The generic ordered tree engine.

use super::*;
use crate::comparator::NaturalOrder;
use crate::error::{TreeError, TreeResult};
use crate::locators::ByKey;

/// An ordered map from keys to values, kept as a binary search tree.
///
/// `C` is the comparator that orders the keys, and `H` is the strategy that
/// post-processes every successful operation.
/// The search, insertion and removal logic itself is always the one of
/// [`BasicTree`], so a strategy can't break the map semantics by accident.
///
/// Every operation is all-or-nothing: when an operation returns an error,
/// the tree is exactly as it was before the call, including its shape.
#[derive(destructure)]
pub struct OrderedTree<K, V, C, H> {
    tree: BasicTree<K, V>,
    comparator: C,
    hooks: H,
    len: usize,
}

/// A plain, unbalanced binary search tree.
pub type PlainTree<K, V, C = NaturalOrder> = OrderedTree<K, V, C, PlainHooks>;

impl<K: Ord, V, H: TreeHooks<K, V> + Default> OrderedTree<K, V, NaturalOrder, H> {
    /// Creates an empty tree, ordered by the keys' [`Ord`] instance.
    pub fn new() -> Self {
        OrderedTree::with_hooks(NaturalOrder, H::default())
    }
}

impl<K, V, C: Comparator<K>, H: TreeHooks<K, V> + Default> OrderedTree<K, V, C, H> {
    /// Creates an empty tree, ordered by the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        OrderedTree::with_hooks(comparator, H::default())
    }
}

impl<K, V, C, H> OrderedTree<K, V, C, H> {
    pub fn with_hooks(comparator: C, hooks: H) -> Self {
        OrderedTree {
            tree: BasicTree::Empty,
            comparator,
            hooks,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every node. The nodes are released iteratively, so this is safe
    /// to call on arbitrarily deep trees.
    pub fn clear(&mut self) {
        deallocate_iteratively(&mut self.tree);
        self.len = 0;
    }

    /// The key and value at the root, if any.
    pub fn root(&self) -> Option<(&K, &V)> {
        let node = self.tree.node()?;
        Some((&node.key, &node.value))
    }

    /// The number of levels in the tree. Takes linear time.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Iterates over the key-value pairs in increasing key order.
    /// Iterating doesn't count as accessing, so the tree is not restructured.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Visits every node before its subtrees, left subtree first.
    /// The visitor receives the key, the value and the depth of the node.
    pub fn prefix<F: FnMut(&K, &V, usize)>(&self, visitor: F) {
        self.tree.prefix(visitor)
    }

    /// Visits every node after its subtrees, left subtree first.
    pub fn postfix<F: FnMut(&K, &V, usize)>(&self, visitor: F) {
        self.tree.postfix(visitor)
    }

    /// Visits every node between its left and right subtrees, i.e., in key order.
    pub fn infix<F: FnMut(&K, &V, usize)>(&self, visitor: F) {
        self.tree.infix(visitor)
    }

    pub fn as_inner(&self) -> &BasicTree<K, V> {
        &self.tree
    }

    pub fn into_inner(self) -> BasicTree<K, V> {
        let (tree, _, _, _) = self.destructure();
        tree
    }
}

impl<K, V, C: Comparator<K>, H: TreeHooks<K, V>> OrderedTree<K, V, C, H> {
    /// Returns the value stored with the key, without running the hooks.
    /// Use this to look at the tree without restructuring it.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let node = self.tree.search(ByKey::new(key, &self.comparator))?;
        Some(&node.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    /// Finds the value stored with the key.
    /// After the node is found, the `post_find` hook runs on it.
    ///
    ///```
    /// use arbor::*;
    ///
    /// let mut tree: PlainTree<i32, &str> = PlainTree::new();
    /// tree.insert(2, "two").unwrap();
    /// assert_eq!(tree.find(&2), Ok(&"two"));
    /// assert_eq!(tree.find(&3), Err(TreeError::NotFound(3)));
    ///```
    pub fn find(&mut self, key: &K) -> TreeResult<&V, K>
    where
        K: Clone,
    {
        self.access(key)?;
        self.peek(key).ok_or_else(|| TreeError::NotFound(key.clone()))
    }

    /// Like [`OrderedTree::find`], but returns a mutable reference to the value.
    pub fn find_mut(&mut self, key: &K) -> TreeResult<&mut V, K>
    where
        K: Clone,
    {
        self.access(key)?;
        let node = self
            .tree
            .search_mut(ByKey::new(key, &self.comparator))
            .ok_or_else(|| TreeError::NotFound(key.clone()))?;
        Ok(node.value_mut())
    }

    // locates the key and runs the `post_find` hook on it
    fn access(&mut self, key: &K) -> TreeResult<(), K>
    where
        K: Clone,
    {
        let path = match self.tree.search_path(ByKey::new(key, &self.comparator)) {
            Some(path) => path,
            None => {
                log::debug!("find rejected: key not found");
                return Err(TreeError::NotFound(key.clone()));
            }
        };
        self.hooks.post_find(&mut self.tree, &path);
        Ok(())
    }

    /// Inserts a new key and value.
    /// If the key is already present, returns [`TreeError::AlreadyExists`]
    /// and doesn't change anything: an existing value is never overwritten.
    /// After the node is attached, the `post_insert` hook runs on it.
    pub fn insert(&mut self, key: K, value: V) -> TreeResult<(), K> {
        match self.tree.insert_by(key, value, &self.comparator) {
            Ok(path) => {
                self.len += 1;
                self.hooks.post_insert(&mut self.tree, &path);
                Ok(())
            }
            Err((key, _)) => {
                log::debug!("insert rejected: key already exists");
                Err(TreeError::AlreadyExists(key))
            }
        }
    }

    /// Removes the key, and returns its value.
    pub fn remove(&mut self, key: &K) -> TreeResult<V, K>
    where
        K: Clone,
    {
        let (_, value) = self.remove_entry(key)?;
        Ok(value)
    }

    /// Removes the key, and returns the stored key together with its value.
    /// The removal itself is performed by the strategy, and then the
    /// `post_remove` hook runs.
    pub fn remove_entry(&mut self, key: &K) -> TreeResult<(K, V), K>
    where
        K: Clone,
    {
        match self.hooks.remove(&mut self.tree, key, &self.comparator) {
            Some(entry) => {
                self.len -= 1;
                self.hooks.post_remove(&mut self.tree);
                Ok(entry)
            }
            None => {
                log::debug!("remove rejected: key not found");
                Err(TreeError::NotFound(key.clone()))
            }
        }
    }

    /// Checks that the keys are in strictly increasing order and that the
    /// cached length is accurate. If not, panics.
    pub fn assert_correctness(&self) {
        self.tree.assert_ordered(&self.comparator);
        assert_eq!(self.tree.count(), self.len, "cached length is wrong");
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>, H: TreeHooks<K, V>> OrderedTree<K, V, C, H> {
    /// Builds a tree holding a copy of every pair of `source`, which may use another
    /// comparator and another strategy. For instance, this turns a [`PlainTree`]
    /// into a [`SplayTree`].
    ///
    /// The pairs are inserted in the prefix order of `source`. If the new comparator
    /// considers two of the keys equal, the one visited first is kept.
    pub fn from_tree<C2, H2>(source: &OrderedTree<K, V, C2, H2>) -> Self
    where
        C: Default,
        H: Default,
    {
        let mut res = OrderedTree::default();
        res.insert_all_from(source);
        res
    }

    // reinserts every pair of `source`, in prefix order, through our own insertion
    fn insert_all_from<C2, H2>(&mut self, source: &OrderedTree<K, V, C2, H2>) {
        source.prefix(|key, value, _| {
            if self.insert(key.clone(), value.clone()).is_err() {
                log::debug!("copy skipped a key that is equal under the new order");
            }
        });
    }
}

impl<K, V, C, H> Clone for OrderedTree<K, V, C, H>
where
    K: Clone,
    V: Clone,
    C: Comparator<K> + Clone,
    H: TreeHooks<K, V> + Clone,
{
    /// Builds a fully independent copy by reinserting every key and value.
    fn clone(&self) -> Self {
        let mut res = OrderedTree::with_hooks(self.comparator.clone(), self.hooks.clone());
        res.insert_all_from(self);
        res
    }

    /// Releases the current content first, then copies `source` like [`Clone::clone`].
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.comparator = source.comparator.clone();
        self.hooks = source.hooks.clone();
        self.insert_all_from(source);
    }
}

impl<K, V, C, H> Drop for OrderedTree<K, V, C, H> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }
}

impl<K, V, C: Default, H: Default> Default for OrderedTree<K, V, C, H> {
    fn default() -> Self {
        OrderedTree::with_hooks(C::default(), H::default())
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, C, H> std::fmt::Debug for OrderedTree<K, V, C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two trees are equal if they hold the same keys and values, regardless of shape.
impl<K: PartialEq, V: PartialEq, C, H, C2, H2> PartialEq<OrderedTree<K, V, C2, H2>>
    for OrderedTree<K, V, C, H>
{
    fn eq(&self, other: &OrderedTree<K, V, C2, H2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V, C, H> Extend<(K, V)> for OrderedTree<K, V, C, H>
where
    C: Comparator<K>,
    H: TreeHooks<K, V>,
{
    /// Inserts every pair. Pairs whose key is already present are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K, V, C, H> std::iter::FromIterator<(K, V)> for OrderedTree<K, V, C, H>
where
    C: Comparator<K> + Default,
    H: TreeHooks<K, V> + Default,
{
    /// Builds a tree by inserting the pairs one by one.
    /// Pairs whose key was already inserted are skipped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = OrderedTree::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V, C, H> IntoIterator for &'a OrderedTree<K, V, C, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn plain_remove_with_two_sons_uses_successor() {
        //        5
        //      3   8
        //     1 4 7 9
        //        6
        let mut tree: PlainTree<i32, i32> = PlainTree::new();
        for x in [5, 3, 8, 1, 4, 7, 9, 6].iter() {
            tree.insert(*x, *x * 10).unwrap();
        }
        assert_eq!(tree.remove_entry(&5), Ok((5, 50)));

        // the root node stays, holding the successor's key and value
        assert_eq!(tree.root(), Some((&6, &60)));
        let mut shape = vec![];
        tree.prefix(|k, _, d| shape.push((*k, d)));
        assert_eq!(
            shape,
            vec![(6, 0), (3, 1), (1, 2), (4, 2), (8, 1), (7, 2), (9, 2)]
        );
        tree.assert_correctness();
    }

    #[test]
    fn plain_remove_with_one_son() {
        let mut tree: PlainTree<i32, ()> = [(4, ()), (2, ()), (1, ())].iter().cloned().collect();
        assert_eq!(tree.remove(&2), Ok(()));
        let mut shape = vec![];
        tree.prefix(|k, _, d| shape.push((*k, d)));
        assert_eq!(shape, vec![(4, 0), (1, 1)]);

        assert_eq!(tree.remove(&4), Ok(()));
        assert_eq!(tree.root(), Some((&1, &())));
        assert_eq!(tree.remove(&1), Ok(()));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn plain_find_keeps_shape() {
        let mut tree: PlainTree<i32, ()> = (0..10).map(|x| (x, ())).collect();
        assert_eq!(tree.depth(), 10);
        assert_eq!(tree.find(&9), Ok(&()));
        assert_eq!(tree.root(), Some((&0, &())));
        assert_eq!(tree.depth(), 10);
    }

    #[test]
    fn find_mut_changes_the_value() {
        let mut tree: SplayTree<&str, i32> = SplayTree::new();
        tree.insert("a", 1).unwrap();
        tree.insert("b", 2).unwrap();
        *tree.find_mut(&"a").unwrap() += 40;
        assert_eq!(tree.peek(&"a"), Some(&41));
        assert_eq!(tree.find_mut(&"c"), Err(TreeError::NotFound("c")));
    }

    #[test]
    fn clear_releases_everything() {
        let mut tree: SplayTree<i32, String> = (0..100).map(|x| (x, x.to_string())).collect();
        assert_eq!(tree.len(), 100);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        tree.insert(3, "3".to_string()).unwrap();
        tree.assert_correctness();
    }

    #[test]
    fn debug_prints_as_a_map() {
        let tree: SplayTree<i32, char> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1: 'a', 2: 'b'}");
    }

    #[test]
    fn closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut tree = SplayTree::with_comparator(by_len);
        tree.insert("ccc", 3).unwrap();
        tree.insert("a", 1).unwrap();
        assert_eq!(tree.insert("bbb", 0), Err(TreeError::AlreadyExists("bbb")));
        assert_eq!(tree.find(&"zzz"), Ok(&3));
    }

    #[test]
    fn into_inner_keeps_the_nodes() {
        let tree: SplayTree<i32, ()> = (0..5).map(|x| (x, ())).collect();
        let inner = tree.into_inner();
        assert_eq!(inner.count(), 5);
        assert_eq!(inner.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }
}
