use std::iter::FusedIterator;

use crate::tree_node::TreeNode;
use crate::util::next;

/// In-order iterator over a tree's elements.
///
/// Walks parent links instead of keeping a stack, so creating one is O(1)
/// and every call to `iter()` starts over from the smallest element.
pub struct Iter<'a, T, M> {
    nodes: &'a [TreeNode<T, M>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, T, M> Iter<'a, T, M> {
    pub(crate) fn new(nodes: &'a [TreeNode<T, M>], first: Option<u32>, len: usize) -> Self {
        Self {
            nodes,
            curr: first,
            remaining: len,
        }
    }
}

impl<T, M> Clone for Iter<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, M> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.nodes, i);
        self.remaining = self.remaining.saturating_sub(1);
        self.nodes[i as usize].e.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, M> ExactSizeIterator for Iter<'_, T, M> {}

impl<T, M> FusedIterator for Iter<'_, T, M> {}
