//! Ordered key-value trees with a pluggable post-operation strategy,
//! and a splay tree built on top of them.
//!
//! The engine ([`OrderedTree`]) implements the plain binary search tree
//! algorithms for `find`, `insert` and `remove`. After every successful
//! operation it calls into a [`TreeHooks`] strategy, which is the only place
//! a balancing algorithm can plug in. [`PlainTree`] uses hooks that do nothing,
//! and [`SplayTree`] uses hooks that splay the touched node to the root.
//!
//!```
//! use arbor::*;
//!
//! let mut tree: SplayTree<i32, &str> = SplayTree::new();
//! tree.insert(8, "eight").unwrap();
//! tree.insert(4, "four").unwrap();
//! tree.insert(6, "six").unwrap();
//!
//! assert_eq!(tree.find(&4), Ok(&"four"));
//! assert_eq!(tree.root(), Some((&4, &"four")));
//! assert_eq!(tree.insert(4, "again"), Err(TreeError::AlreadyExists(4)));
//! assert_eq!(tree.remove(&10), Err(TreeError::NotFound(10)));
//!```

#[macro_use]
extern crate derive_destructure;

pub mod comparator;
pub mod error;
pub mod locators;
pub mod trees;

pub use comparator::*;
pub use error::*;
pub use locators::*;
pub use trees::*;
