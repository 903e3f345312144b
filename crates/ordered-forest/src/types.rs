//! Shared trait definitions.
//!
//! Every "pointer" in this crate is an `Option<u32>` index into the arena
//! that owns the nodes. Link helpers in [`crate::util`] are generic over
//! [`Node`] and take the node slice directly.

use std::cmp::Ordering;

use crate::error::TreeError;

/// Stable index of a node inside its tree's arena.
///
/// An id stays attached to the same node until that node is removed; after
/// that the slot may be handed to a later insert.
pub type NodeId = u32;

/// Comparator used when a tree is built with `new()`.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

pub(crate) fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Ordered collection capability consumed by the sequence, map, heap and
/// graph collaborators.
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, element: T);

    /// Removes one occurrence of `element`. Absent elements are a no-op.
    fn remove(&mut self, element: &T) -> Option<T>;

    fn contains(&self, element: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Elements in non-decreasing order. Each call starts a fresh traversal.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Tree surface shared by the plain, AVL and red-black trees.
pub trait SearchTree<T>: Collection<T> {
    type Handle<'a>
    where
        Self: 'a;

    fn search(&self, element: &T) -> Option<Self::Handle<'_>>;

    /// `-1` for an empty tree, otherwise the height of the root.
    fn height(&self) -> i32;

    /// Only meaningful immediately after an insert.
    fn last_inserted(&self) -> Option<Self::Handle<'_>>;

    fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError>;

    fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError>;

    fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>);

    fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>);

    fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>);
}
