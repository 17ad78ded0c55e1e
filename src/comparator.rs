//! The total order a tree keeps its keys in.
//!
//! Trees never call `Ord` on their keys directly. Instead they hold a
//! [`Comparator`], which is consulted for every comparison. Closures of the
//! form `Fn(&K, &K) -> Ordering` are comparators as well, and so are references
//! to them, so a single comparison function can be shared between several trees.

pub use std::cmp::Ordering;

/// A strict total order over `K`.
///
/// The result must be consistent across all calls for as long as a tree uses
/// the comparator, otherwise the tree's ordering invariant is lost.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the inner comparator.
///
///```
/// use arbor::*;
///
/// let mut tree = SplayTree::with_comparator(ReverseOrder(NaturalOrder));
/// for x in 1..=5 {
///     tree.insert(x, ()).unwrap();
/// }
/// let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![5, 4, 3, 2, 1]);
///```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
