//! Arena-based ordered binary search trees.
//!
//! [`OrderedTree`] is an unbalanced binary search tree ordered by a
//! three-way comparator. [`AvlTree`] and [`RbTree`] wrap the same core and
//! restore their balance invariant after every insert and remove.
//!
//! Nodes live in an [`Arena`] and link to each other through `Option<u32>`
//! slot indices, so a parent link never owns its parent. A node's id
//! ([`NodeId`]) stays valid until that node is removed.
//!
//! Equal elements descend to the **left**, so the trees behave as multisets:
//! every node's left subtree holds elements `<=` it and its right subtree
//! holds elements `>` it.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] links, [`Collection`] and [`SearchTree`] traits |
//! [`tree_node`] | [`TreeNode`] and the per-variant [`Metadata`] payload |
//! [`arena`] | Slot arena with free-list reuse |
//! [`util`] | Iterative link helpers: `first`, `next`, rotations, `height` |
//! [`bst`] | [`OrderedTree`], [`NodeRef`] handles and in-order [`Iter`] |
//! [`avl`] | [`AvlTree`] with cached [`Height`] |
//! [`red_black`] | [`RbTree`] with node [`Color`] |
//! [`print`] | Box-drawing dumps behind the `Display` impls |
//!
//! ```
//! use ordered_forest::AvlTree;
//!
//! let tree: AvlTree<i32> = (1..=7).collect();
//! assert_eq!(*tree.root().unwrap().element(), 4);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
//! ```

pub mod arena;
pub mod avl;
pub mod bst;
pub mod error;
pub mod print;
#[path = "red-black/mod.rs"]
pub mod red_black;
pub mod tree_node;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use avl::{AvlTree, Height};
pub use bst::{Iter, NodeRef, OrderedTree};
pub use error::TreeError;
pub use red_black::{Color, RbTree};
pub use tree_node::{Metadata, TreeNode};
pub use types::{Collection, Comparator, Node, NodeId, SearchTree};
