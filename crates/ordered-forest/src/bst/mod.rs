//! Ordered binary search tree core.
//!
//! [`OrderedTree`] owns the arena and implements the structural half of
//! every operation: ordered insert, directed search, unlink with
//! predecessor swap, and rotations. The AVL and red-black trees wrap an
//! `OrderedTree` with their own metadata and run their fix-up after each
//! structural change.
//!
//! Equal elements always descend to the **left**: a node's left subtree holds
//! elements `<=` it and its right subtree holds elements `>` it.

mod handle;
mod iter;

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::arena::Arena;
use crate::error::TreeError;
use crate::print;
use crate::tree_node::{Metadata, TreeNode};
use crate::types::{natural_order, Collection, Comparator, NodeId, SearchTree};
use crate::util::{
    self, assert_links, first, get_l, get_p, get_r, last, next, replace_child, set_l, set_p,
    set_r,
};

pub use handle::NodeRef;
pub use iter::Iter;

/// Result of splicing a node with at most one child out of the tree.
#[derive(Debug)]
pub(crate) struct Unlinked<T> {
    /// Former parent of the removed node.
    pub parent: Option<u32>,
    /// Child promoted into the removed node's place.
    pub child: Option<u32>,
    pub element: T,
}

/// Unbalanced ordered binary search tree.
///
/// `M` is the per-node metadata (`()` here, a height for AVL, a color for
/// red-black) and `C` the three-way comparator. Only the unit-metadata tree
/// can be built from outside the crate; heights and colors are owned by
/// [`AvlTree`](crate::AvlTree) and [`RbTree`](crate::RbTree).
///
/// ```compile_fail
/// use ordered_forest::{Height, OrderedTree};
///
/// let tree: OrderedTree<i32, Height> = (1..=5).collect();
/// ```
///
/// ```compile_fail
/// use ordered_forest::{Color, OrderedTree};
///
/// let tree = OrderedTree::<i32, Color, _>::with_comparator(|a: &i32, b: &i32| a.cmp(b));
/// ```
#[derive(Clone)]
pub struct OrderedTree<T, M = (), C = Comparator<T>> {
    arena: Arena<TreeNode<T, M>>,
    root: Option<u32>,
    len: usize,
    last_inserted: Option<u32>,
    comparator: C,
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::empty(capacity, natural_order::<T>)
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedTree<T, (), C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::empty(0, comparator)
    }
}

impl<T, M, C> OrderedTree<T, M, C>
where
    M: Metadata,
    C: Fn(&T, &T) -> Ordering,
{
    /// Only the balancers build cores with non-unit metadata; they keep that
    /// metadata current after every structural change.
    pub(crate) fn empty(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            last_inserted: None,
            comparator,
        }
    }

    // ----------------------------------------------------------------------
    // Crate-internal accessors used by the balancers.

    pub(crate) fn nodes(&self) -> &[TreeNode<T, M>] {
        self.arena.nodes()
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) fn parent_of(&self, idx: u32) -> Option<u32> {
        get_p(self.arena.nodes(), idx)
    }

    pub(crate) fn left_of(&self, idx: u32) -> Option<u32> {
        get_l(self.arena.nodes(), idx)
    }

    pub(crate) fn right_of(&self, idx: u32) -> Option<u32> {
        get_r(self.arena.nodes(), idx)
    }

    pub(crate) fn meta(&self, idx: u32) -> &M {
        &self.arena[idx].m
    }

    pub(crate) fn meta_mut(&mut self, idx: u32) -> &mut M {
        &mut self.arena[idx].m
    }

    pub(crate) fn element_at(&self, idx: u32) -> &T {
        self.arena[idx]
            .e
            .as_ref()
            .expect("live node holds an element")
    }

    pub(crate) fn is_live(&self, idx: u32) -> bool {
        self.arena.contains(idx)
            && self.arena[idx].e.is_some()
            && (self.root == Some(idx) || self.parent_of(idx).is_some())
    }

    pub(crate) fn handle(&self, idx: u32) -> NodeRef<'_, T, M, C> {
        NodeRef::new(self, idx)
    }

    // ----------------------------------------------------------------------
    // Structural primitives.

    /// Inserts `element` by ordered descent and returns its node id.
    ///
    /// At each node the new element goes left when the node compares `>=`
    /// to it, so duplicates end up in the left subtree of their equals.
    pub fn insert(&mut self, element: T) -> NodeId {
        let n = self.arena.alloc(TreeNode::new(element));
        self.len += 1;
        self.last_inserted = Some(n);

        let Some(mut curr) = self.root else {
            self.root = Some(n);
            return n;
        };

        loop {
            let go_left =
                (self.comparator)(self.element_at(curr), self.element_at(n)) != Ordering::Less;
            let child = if go_left {
                self.left_of(curr)
            } else {
                self.right_of(curr)
            };
            match child {
                Some(child) => curr = child,
                None => {
                    let nodes = self.arena.nodes_mut();
                    if go_left {
                        set_l(nodes, curr, Some(n));
                    } else {
                        set_r(nodes, curr, Some(n));
                    }
                    set_p(nodes, n, Some(curr));
                    return n;
                }
            }
        }
    }

    /// Like [`insert`](Self::insert) for callers holding a possibly absent
    /// element. `None` is rejected before anything is touched.
    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeId, TreeError> {
        let element = element.ok_or(TreeError::InvalidArgument("element is absent"))?;
        Ok(self.insert(element))
    }

    /// Directed descent; stops at the first node comparing equal.
    pub(crate) fn find(&self, element: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match (self.comparator)(element, self.element_at(i)) {
                Ordering::Equal => return Some(i),
                Ordering::Less => self.left_of(i),
                Ordering::Greater => self.right_of(i),
            };
        }
        None
    }

    /// Full pre-order scan, ignoring the ordering of the tree.
    pub(crate) fn find_by_scan(&self, element: &T) -> Option<u32> {
        let nodes = self.arena.nodes();
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            if (self.comparator)(element, self.element_at(i)) == Ordering::Equal {
                return Some(i);
            }
            stack.extend(get_r(nodes, i));
            stack.extend(get_l(nodes, i));
        }
        None
    }

    /// Picks the node to physically unlink when removing `idx`.
    ///
    /// A node with two children trades elements with its in-order predecessor
    /// (the maximum of its left subtree), which has no right child; the
    /// predecessor is returned. Otherwise `idx` itself is returned.
    pub(crate) fn removable(&mut self, idx: u32) -> u32 {
        let (Some(l), Some(_)) = (self.left_of(idx), self.right_of(idx)) else {
            return idx;
        };
        let pred = last(self.arena.nodes(), Some(l)).expect("left subtree is non-empty");
        let a = self.arena[idx].e.take();
        let b = self.arena[pred].e.take();
        self.arena[idx].e = b;
        self.arena[pred].e = a;
        trace!("swapped node {idx} with predecessor {pred}");
        pred
    }

    /// Splices out `idx`, which must have at most one child, promoting that
    /// child. Both directions of every severed link are cleared and the slot
    /// is returned to the arena.
    pub(crate) fn unlink(&mut self, idx: u32) -> Unlinked<T> {
        let nodes = self.arena.nodes_mut();
        let p = get_p(nodes, idx);
        let l = get_l(nodes, idx);
        let r = get_r(nodes, idx);
        debug_assert!(l.is_none() || r.is_none(), "unlink of node with two children");
        let c = l.or(r);

        if let Some(c) = c {
            set_p(nodes, c, p);
        }
        match p {
            Some(p) => replace_child(nodes, p, idx, c),
            None => self.root = c,
        }

        let node = &mut self.arena[idx];
        node.p = None;
        node.l = None;
        node.r = None;
        let element = node.e.take().expect("unlinked node holds an element");
        self.arena.release(idx);
        self.len -= 1;
        self.last_inserted = None;

        Unlinked {
            parent: p,
            child: c,
            element,
        }
    }

    /// Attaches an element-less leaf as the left child of childless `parent`.
    pub(crate) fn attach_placeholder(&mut self, parent: u32, m: M) -> u32 {
        debug_assert!(self.arena[parent].is_leaf());
        let s = self.arena.alloc(TreeNode::placeholder(m));
        let nodes = self.arena.nodes_mut();
        set_l(nodes, parent, Some(s));
        set_p(nodes, s, Some(parent));
        s
    }

    /// Detaches and frees a leaf created by [`attach_placeholder`](Self::attach_placeholder).
    pub(crate) fn detach_placeholder(&mut self, s: u32) {
        debug_assert!(self.arena[s].e.is_none() && self.arena[s].is_leaf());
        let nodes = self.arena.nodes_mut();
        match get_p(nodes, s) {
            Some(p) => replace_child(nodes, p, s, None),
            None => self.root = None,
        }
        self.arena[s].p = None;
        self.arena.release(s);
    }

    pub(crate) fn rotate_left_at(&mut self, idx: u32) {
        let root = self.root.expect("rotation in non-empty tree");
        trace!("rotate left at node {idx}");
        self.root = Some(util::rotate_left(self.arena.nodes_mut(), root, idx));
    }

    pub(crate) fn rotate_right_at(&mut self, idx: u32) {
        let root = self.root.expect("rotation in non-empty tree");
        trace!("rotate right at node {idx}");
        self.root = Some(util::rotate_right(self.arena.nodes_mut(), root, idx));
    }

    pub(crate) fn check_live(&self, idx: NodeId) -> Result<(), TreeError> {
        if self.is_live(idx) {
            Ok(())
        } else {
            Err(TreeError::InvalidArgument("node is not part of this tree"))
        }
    }

    // ----------------------------------------------------------------------
    // Public surface.

    pub fn search(&self, element: &T) -> Option<NodeRef<'_, T, M, C>> {
        self.find(element).map(|i| self.handle(i))
    }

    /// Visits every node until one compares equal to `element`.
    ///
    /// Unlike [`search`](Self::search) this does not rely on the ordering
    /// invariant and always costs O(n).
    pub fn scan(&self, element: &T) -> Option<NodeRef<'_, T, M, C>> {
        self.find_by_scan(element).map(|i| self.handle(i))
    }

    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Removes one occurrence of `element`, or does nothing if it is absent.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let idx = self.find(element)?;
        let target = self.removable(idx);
        Some(self.unlink(target).element)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        debug!("clearing tree with {} elements", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
        self.last_inserted = None;
    }

    /// `-1` for an empty tree, otherwise the root's height.
    pub fn height(&self) -> i32 {
        match self.root {
            None => -1,
            Some(root) => self
                .meta(root)
                .cached_height()
                .unwrap_or_else(|| util::height(self.arena.nodes(), Some(root))),
        }
    }

    pub fn root(&self) -> Result<NodeRef<'_, T, M, C>, TreeError> {
        self.root
            .map(|i| self.handle(i))
            .ok_or(TreeError::EmptyStructure)
    }

    /// Smallest element.
    pub fn first(&self) -> Result<&T, TreeError> {
        first(self.arena.nodes(), self.root)
            .map(|i| self.element_at(i))
            .ok_or(TreeError::EmptyStructure)
    }

    /// Largest element.
    pub fn last(&self) -> Result<&T, TreeError> {
        last(self.arena.nodes(), self.root)
            .map(|i| self.element_at(i))
            .ok_or(TreeError::EmptyStructure)
    }

    /// Node created by the most recent insert.
    ///
    /// Only valid immediately after [`insert`](Self::insert); any other
    /// mutating call may invalidate it.
    pub fn last_inserted(&self) -> Option<NodeRef<'_, T, M, C>> {
        self.last_inserted
            .filter(|&i| self.is_live(i))
            .map(|i| self.handle(i))
    }

    /// Looks up a node by id. Returns `None` for ids that are not live.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, M, C>> {
        self.is_live(id).then(|| self.handle(id))
    }

    /// Elements in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter::new(
            self.arena.nodes(),
            first(self.arena.nodes(), self.root),
            self.len,
        )
    }

    pub fn dfs_pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, T, M, C>),
    {
        let nodes = self.arena.nodes();
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            visit(self.handle(i));
            stack.extend(get_r(nodes, i));
            stack.extend(get_l(nodes, i));
        }
    }

    pub fn dfs_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, T, M, C>),
    {
        let nodes = self.arena.nodes();
        let mut curr = first(nodes, self.root);
        while let Some(i) = curr {
            visit(self.handle(i));
            curr = next(nodes, i);
        }
    }

    pub fn dfs_post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, T, M, C>),
    {
        let nodes = self.arena.nodes();
        let mut stack: Vec<(u32, bool)> = self.root.map(|r| (r, false)).into_iter().collect();
        while let Some((i, expanded)) = stack.pop() {
            if expanded {
                visit(self.handle(i));
                continue;
            }
            stack.push((i, true));
            if let Some(r) = get_r(nodes, i) {
                stack.push((r, false));
            }
            if let Some(l) = get_l(nodes, i) {
                stack.push((l, false));
            }
        }
    }

    /// Level-order traversal, left to right within each level.
    pub fn bfs<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, T, M, C>),
    {
        let nodes = self.arena.nodes();
        let mut queue: std::collections::VecDeque<u32> = self.root.into_iter().collect();
        while let Some(i) = queue.pop_front() {
            visit(self.handle(i));
            queue.extend(get_l(nodes, i));
            queue.extend(get_r(nodes, i));
        }
    }

    /// Checks links, the element count and in-order sortedness.
    pub fn assert_ordered(&self) -> Result<(), String> {
        assert_ordered_tree(self.arena.nodes(), self.root, &self.comparator)?;
        let count = util::size(self.arena.nodes(), self.root);
        if count != self.len {
            return Err(format!("Length mismatch: counted {count}, recorded {}", self.len));
        }
        Ok(())
    }

    pub(crate) fn render(&self, name: &str) -> String
    where
        T: fmt::Display,
    {
        print::render(name, self.arena.nodes(), self.root)
    }
}

/// Link symmetry plus non-decreasing in-order sequence.
pub fn assert_ordered_tree<T, M, C>(
    nodes: &[TreeNode<T, M>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&T, &T) -> Ordering,
{
    assert_links(nodes, root)?;

    let element = |i: u32| {
        nodes[i as usize]
            .e
            .as_ref()
            .ok_or_else(|| format!("Node {i} has no element"))
    };

    let mut curr = first(nodes, root);
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        let e = element(i)?;
        if let Some(prev) = prev_node {
            if comparator(element(prev)?, e) == Ordering::Greater {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(nodes, i);
    }
    Ok(())
}

impl<T, C> OrderedTree<T, (), C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Pivots `node` below its right child. No-op without a right child.
    ///
    /// Fails with [`TreeError::InvalidArgument`] when no node occupies the
    /// id's slot. Ids of removed nodes are recycled, so after a later insert
    /// an old id names the new node.
    pub fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.check_live(node)?;
        self.rotate_left_at(node);
        Ok(())
    }

    /// Pivots `node` below its left child. No-op without a left child.
    ///
    /// Same id rules as [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.check_live(node)?;
        self.rotate_right_at(node);
        Ok(())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.assert_ordered()
    }
}

impl<T, C> Collection<T> for OrderedTree<T, (), C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Iter<'a>
        = Iter<'a, T, ()>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, element: T) {
        OrderedTree::insert(self, element);
    }

    fn remove(&mut self, element: &T) -> Option<T> {
        OrderedTree::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        OrderedTree::contains(self, element)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        OrderedTree::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        OrderedTree::iter(self)
    }
}

impl<T, C> SearchTree<T> for OrderedTree<T, (), C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Handle<'a>
        = NodeRef<'a, T, (), C>
    where
        Self: 'a;

    fn search(&self, element: &T) -> Option<Self::Handle<'_>> {
        OrderedTree::search(self, element)
    }

    fn height(&self) -> i32 {
        OrderedTree::height(self)
    }

    fn last_inserted(&self) -> Option<Self::Handle<'_>> {
        OrderedTree::last_inserted(self)
    }

    fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        OrderedTree::rotate_left(self, node)
    }

    fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        OrderedTree::rotate_right(self, node)
    }

    fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        OrderedTree::dfs_pre_order(self, visit)
    }

    fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        OrderedTree::dfs_in_order(self, visit)
    }

    fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        OrderedTree::dfs_post_order(self, visit)
    }
}

impl<'a, T, M, C> IntoIterator for &'a OrderedTree<T, M, C>
where
    M: Metadata,
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, M, C> Extend<T> for OrderedTree<T, M, C>
where
    M: Metadata,
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Structural equality: same shape, equal elements, equal metadata.
impl<T, M, C> PartialEq for OrderedTree<T, M, C>
where
    T: PartialEq,
    M: Metadata,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let (a, b) = (self.arena.nodes(), other.arena.nodes());
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(x), Some(y)) => {
                    let (nx, ny) = (&a[x as usize], &b[y as usize]);
                    if nx.e != ny.e || nx.m != ny.m {
                        return false;
                    }
                    stack.push((nx.l, ny.l));
                    stack.push((nx.r, ny.r));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: fmt::Debug, M, C> fmt::Debug for OrderedTree<T, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.arena.nodes();
        let mut list = f.debug_list();
        let mut curr = first(nodes, self.root);
        while let Some(i) = curr {
            if let Some(e) = nodes[i as usize].e.as_ref() {
                list.entry(e);
            }
            curr = next(nodes, i);
        }
        list.finish()
    }
}

impl<T, M, C> fmt::Display for OrderedTree<T, M, C>
where
    T: fmt::Display,
    M: Metadata,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("OrderedTree"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(values: &[i32]) -> OrderedTree<i32> {
        values.iter().copied().collect()
    }

    fn pre_order(t: &OrderedTree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        t.dfs_pre_order(|n| out.push(*n.element()));
        out
    }

    #[test]
    fn insert_places_by_ordered_descent() {
        let t = tree(&[5, 3, 8, 1, 4]);
        assert_eq!(pre_order(&t), vec![5, 3, 1, 4, 8]);
        assert_eq!(t.len(), 5);
        assert_eq!(t.height(), 2);
        t.assert_valid().unwrap();
    }

    #[test]
    fn equal_elements_go_left() {
        let mut t = tree(&[5]);
        let dup = t.insert(5);
        let root = t.root().unwrap();
        assert_eq!(root.left().unwrap().id(), dup);
        assert!(!root.has_right());

        t.insert(5);
        let second = t.root().unwrap().left().unwrap();
        assert_eq!(*second.left().unwrap().element(), 5);
        t.assert_valid().unwrap();
    }

    #[test]
    fn last_inserted_tracks_the_new_node() {
        let mut t = tree(&[2, 1]);
        let id = t.insert(3);
        let node = t.last_inserted().unwrap();
        assert_eq!(node.id(), id);
        assert_eq!(*node.element(), 3);
        assert_eq!(*node.parent().unwrap().element(), 2);

        t.remove(&1);
        assert!(t.last_inserted().is_none());
    }

    #[test]
    fn try_insert_rejects_absent_element() {
        let mut t = OrderedTree::<i32>::new();
        assert_eq!(
            t.try_insert(None),
            Err(TreeError::InvalidArgument("element is absent"))
        );
        assert!(t.is_empty());
        assert!(t.try_insert(Some(1)).is_ok());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_leaf_single_child_and_two_children() {
        let mut t = tree(&[5, 3, 8, 1, 4, 9]);

        assert_eq!(t.remove(&1), Some(1));
        assert_eq!(pre_order(&t), vec![5, 3, 4, 8, 9]);

        assert_eq!(t.remove(&8), Some(8));
        assert_eq!(pre_order(&t), vec![5, 3, 4, 9]);

        // Two children: 5 takes its predecessor 4.
        assert_eq!(t.remove(&5), Some(5));
        assert_eq!(pre_order(&t), vec![4, 3, 9]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut t = tree(&[2, 1, 3]);
        assert_eq!(t.remove(&7), None);
        assert_eq!(t.len(), 3);
        assert_eq!(pre_order(&t), vec![2, 1, 3]);
    }

    #[test]
    fn remove_root_until_empty() {
        let mut t = tree(&[2, 1, 3]);
        for v in [2, 1, 3] {
            assert_eq!(t.remove(&v), Some(v));
            t.assert_valid().unwrap();
        }
        assert!(t.is_empty());
        assert_eq!(t.height(), -1);
        assert_eq!(t.root().unwrap_err(), TreeError::EmptyStructure);
    }

    #[test]
    fn rotations_keep_order() {
        let mut t = tree(&[2, 1, 4, 3, 5]);
        let root = t.root().unwrap().id();
        t.rotate_left(root).unwrap();
        assert_eq!(*t.root().unwrap().element(), 4);
        assert_eq!(pre_order(&t), vec![4, 2, 1, 3, 5]);
        t.assert_valid().unwrap();

        let root = t.root().unwrap().id();
        t.rotate_right(root).unwrap();
        assert_eq!(pre_order(&t), vec![2, 1, 4, 3, 5]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn rotation_on_dead_node_is_rejected() {
        let mut t = tree(&[2, 1]);
        let leaf = t.search(&1).unwrap().id();
        t.remove(&1);
        assert!(matches!(
            t.rotate_left(leaf),
            Err(TreeError::InvalidArgument(_))
        ));
        assert!(matches!(
            t.rotate_right(99),
            Err(TreeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn traversal_orders() {
        let t = tree(&[4, 2, 6, 1, 3, 5, 7]);
        let mut ino = Vec::new();
        t.dfs_in_order(|n| ino.push(*n.element()));
        let mut post = Vec::new();
        t.dfs_post_order(|n| post.push(*n.element()));
        let mut bfs = Vec::new();
        t.bfs(|n| bfs.push(*n.element()));

        assert_eq!(pre_order(&t), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(ino, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(bfs, vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn scan_and_search_agree_on_valid_tree() {
        let t = tree(&[4, 2, 6, 1, 3]);
        for v in 0..8 {
            assert_eq!(
                t.search(&v).map(|n| n.id()),
                t.scan(&v).map(|n| n.id()),
                "value {v}"
            );
        }
    }

    #[test]
    fn list_height_is_computed_from_links() {
        let t: OrderedTree<i32> = (1..=5).collect();
        assert_eq!(t.height(), 4);
        assert_eq!(t.root().unwrap().height(), 4);
        assert_eq!(t.last_inserted().unwrap().depth(), 4);
    }

    #[test]
    fn first_last_and_empty_structure() {
        let mut t = tree(&[4, 2, 6]);
        assert_eq!(t.first(), Ok(&2));
        assert_eq!(t.last(), Ok(&6));
        t.clear();
        assert_eq!(t.first(), Err(TreeError::EmptyStructure));
        assert_eq!(t.last(), Err(TreeError::EmptyStructure));
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn structural_equality() {
        assert_eq!(tree(&[2, 1, 3]), tree(&[2, 3, 1]));
        assert_ne!(tree(&[2, 1, 3]), tree(&[1, 2, 3]));
        assert_eq!(OrderedTree::<i32>::new(), OrderedTree::<i32>::new());
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut t = OrderedTree::<i32, (), _>::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        t.extend([1, 3, 2]);
        assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        t.assert_ordered().unwrap();
    }

    #[test]
    fn debug_lists_sorted_elements() {
        let t = tree(&[3, 1, 2]);
        assert_eq!(format!("{t:?}"), "[1, 2, 3]");
    }
}
