use std::cmp::Ordering;
use std::fmt;

use crate::bst::{Iter, NodeRef, OrderedTree};
use crate::error::TreeError;
use crate::types::{natural_order, Collection, Comparator, NodeId, SearchTree};

use super::types::Height;
use super::util::{assert_avl_tree, rebalance};

/// AVL tree: an [`OrderedTree`] whose nodes cache their height and which
/// rotates after every insert and remove so that sibling subtrees never
/// differ in height by more than one.
///
/// External rotations are refused with [`TreeError::UnsupportedOperation`];
/// they would leave the cached heights stale.
#[derive(Clone)]
pub struct AvlTree<T, C = Comparator<T>> {
    core: OrderedTree<T, Height, C>,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: OrderedTree::<T, Height>::empty(capacity, natural_order::<T>),
        }
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            core: OrderedTree::empty(0, comparator),
        }
    }

    pub fn insert(&mut self, element: T) -> NodeId {
        let n = self.core.insert(element);
        let p = self.core.parent_of(n);
        rebalance(&mut self.core, p);
        n
    }

    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeId, TreeError> {
        let element = element.ok_or(TreeError::InvalidArgument("element is absent"))?;
        Ok(self.insert(element))
    }

    pub fn remove(&mut self, element: &T) -> Option<T> {
        let idx = self.core.find(element)?;
        let target = self.core.removable(idx);
        let unlinked = self.core.unlink(target);
        rebalance(&mut self.core, unlinked.parent);
        Some(unlinked.element)
    }

    pub fn search(&self, element: &T) -> Option<NodeRef<'_, T, Height, C>> {
        self.core.search(element)
    }

    pub fn scan(&self, element: &T) -> Option<NodeRef<'_, T, Height, C>> {
        self.core.scan(element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.core.contains(element)
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn clear(&mut self) {
        self.core.clear()
    }

    /// `-1` when empty, otherwise the cached height of the root.
    pub fn height(&self) -> i32 {
        self.core.height()
    }

    pub fn root(&self) -> Result<NodeRef<'_, T, Height, C>, TreeError> {
        self.core.root()
    }

    pub fn first(&self) -> Result<&T, TreeError> {
        self.core.first()
    }

    pub fn last(&self) -> Result<&T, TreeError> {
        self.core.last()
    }

    /// Node created by the most recent insert, wherever rebalancing put it.
    pub fn last_inserted(&self) -> Option<NodeRef<'_, T, Height, C>> {
        self.core.last_inserted()
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, Height, C>> {
        self.core.node(id)
    }

    pub fn iter(&self) -> Iter<'_, T, Height> {
        self.core.iter()
    }

    pub fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Height, C>),
    {
        self.core.dfs_pre_order(visit)
    }

    pub fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Height, C>),
    {
        self.core.dfs_in_order(visit)
    }

    pub fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Height, C>),
    {
        self.core.dfs_post_order(visit)
    }

    pub fn bfs<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Height, C>),
    {
        self.core.bfs(visit)
    }

    /// Always fails: rotating an AVL tree from outside breaks its balance.
    pub fn rotate_left(&mut self, _node: NodeId) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation(
            "AVL trees cannot be rotated left by callers",
        ))
    }

    /// Always fails: rotating an AVL tree from outside breaks its balance.
    pub fn rotate_right(&mut self, _node: NodeId) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation(
            "AVL trees cannot be rotated right by callers",
        ))
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(
            self.core.nodes(),
            self.core.root_index(),
            self.core.comparator(),
        )?;
        self.core.assert_ordered()
    }
}

impl<T, C> Collection<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Iter<'a>
        = Iter<'a, T, Height>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, element: T) {
        AvlTree::insert(self, element);
    }

    fn remove(&mut self, element: &T) -> Option<T> {
        AvlTree::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        AvlTree::contains(self, element)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        AvlTree::iter(self)
    }
}

impl<T, C> SearchTree<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Handle<'a>
        = NodeRef<'a, T, Height, C>
    where
        Self: 'a;

    fn search(&self, element: &T) -> Option<Self::Handle<'_>> {
        AvlTree::search(self, element)
    }

    fn height(&self) -> i32 {
        AvlTree::height(self)
    }

    fn last_inserted(&self) -> Option<Self::Handle<'_>> {
        AvlTree::last_inserted(self)
    }

    fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        AvlTree::rotate_left(self, node)
    }

    fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        AvlTree::rotate_right(self, node)
    }

    fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        AvlTree::dfs_pre_order(self, visit)
    }

    fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        AvlTree::dfs_in_order(self, visit)
    }

    fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        AvlTree::dfs_post_order(self, visit)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Height>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: PartialEq, C> PartialEq for AvlTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.core, f)
    }
}

impl<T, C> fmt::Display for AvlTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core.render("AvlTree"))
    }
}
