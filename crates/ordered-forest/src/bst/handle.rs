use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::tree_node::Metadata;
use crate::types::NodeId;
use crate::util;

use super::OrderedTree;

/// Read-only navigation handle to one node.
///
/// A handle borrows its tree, so it cannot outlive the next mutating call.
pub struct NodeRef<'a, T, M, C> {
    tree: &'a OrderedTree<T, M, C>,
    idx: u32,
}

impl<T, M, C> Clone for NodeRef<'_, T, M, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M, C> Copy for NodeRef<'_, T, M, C> {}

impl<'a, T, M, C> NodeRef<'a, T, M, C>
where
    M: Metadata,
    C: Fn(&T, &T) -> Ordering,
{
    pub(crate) fn new(tree: &'a OrderedTree<T, M, C>, idx: u32) -> Self {
        Self { tree, idx }
    }

    fn link(&self, idx: Option<u32>) -> Result<Self, TreeError> {
        idx.map(|i| Self::new(self.tree, i))
            .ok_or(TreeError::EmptyStructure)
    }

    pub fn id(&self) -> NodeId {
        self.idx
    }

    pub fn element(&self) -> &'a T {
        self.tree.element_at(self.idx)
    }

    pub fn meta(&self) -> &'a M {
        self.tree.meta(self.idx)
    }

    pub fn has_parent(&self) -> bool {
        self.tree.parent_of(self.idx).is_some()
    }

    pub fn has_left(&self) -> bool {
        self.tree.left_of(self.idx).is_some()
    }

    pub fn has_right(&self) -> bool {
        self.tree.right_of(self.idx).is_some()
    }

    pub fn parent(&self) -> Result<Self, TreeError> {
        self.link(self.tree.parent_of(self.idx))
    }

    pub fn left(&self) -> Result<Self, TreeError> {
        self.link(self.tree.left_of(self.idx))
    }

    pub fn right(&self) -> Result<Self, TreeError> {
        self.link(self.tree.right_of(self.idx))
    }

    /// Height of the subtree rooted here, `0` for a leaf.
    pub fn height(&self) -> i32 {
        self.meta()
            .cached_height()
            .unwrap_or_else(|| util::height(self.tree.nodes(), Some(self.idx)))
    }

    /// Number of edges up to the root.
    pub fn depth(&self) -> usize {
        util::depth(self.tree.nodes(), self.idx)
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }
}

impl<T: fmt::Debug, M: Metadata, C> fmt::Debug for NodeRef<'_, T, M, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.idx)
            .field("element", self.element())
            .field("meta", self.meta())
            .finish()
    }
}
