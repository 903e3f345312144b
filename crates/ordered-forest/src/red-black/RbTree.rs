use std::cmp::Ordering;
use std::fmt;

use crate::bst::{Iter, NodeRef, OrderedTree};
use crate::error::TreeError;
use crate::types::{natural_order, Collection, Comparator, NodeId, SearchTree};

use super::types::Color;
use super::util::{assert_red_black_tree, fix_insert, fix_remove};

/// Red-black tree: an [`OrderedTree`] whose nodes carry a [`Color`].
///
/// After every insert and remove the tree is recolored and rotated so that
/// the root is black, no red node has a red child, and every path from a
/// node down to an absent child crosses the same number of black nodes.
/// External rotations are refused with [`TreeError::UnsupportedOperation`].
#[derive(Clone)]
pub struct RbTree<T, C = Comparator<T>> {
    core: OrderedTree<T, Color, C>,
}

impl<T: Ord> RbTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: OrderedTree::<T, Color>::empty(capacity, natural_order::<T>),
        }
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, C> NodeRef<'a, T, Color, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn color(&self) -> Color {
        *self.meta()
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            core: OrderedTree::empty(0, comparator),
        }
    }

    /// Color of the node holding `element`, if present.
    pub fn color_of(&self, element: &T) -> Option<Color> {
        self.core.find(element).map(|i| *self.core.meta(i))
    }

    pub fn insert(&mut self, element: T) -> NodeId {
        let n = self.core.insert(element);
        fix_insert(&mut self.core, n);
        n
    }

    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeId, TreeError> {
        let element = element.ok_or(TreeError::InvalidArgument("element is absent"))?;
        Ok(self.insert(element))
    }

    pub fn remove(&mut self, element: &T) -> Option<T> {
        let idx = self.core.find(element)?;
        let v = self.core.removable(idx);

        // A childless node gets a black stand-in child so the fix-up always
        // has a node to carry the extra black.
        let placeholder = (self.core.left_of(v).is_none() && self.core.right_of(v).is_none())
            .then(|| self.core.attach_placeholder(v, Color::Black));

        let v_black = self.core.meta(v).is_black();
        let unlinked = self.core.unlink(v);
        let h = unlinked.child.expect("spliced node has a child");
        if v_black && self.core.meta(h).is_black() {
            fix_remove(&mut self.core, h);
        } else {
            *self.core.meta_mut(h) = Color::Black;
        }

        if let Some(s) = placeholder {
            self.core.detach_placeholder(s);
        }
        Some(unlinked.element)
    }

    pub fn search(&self, element: &T) -> Option<NodeRef<'_, T, Color, C>> {
        self.core.search(element)
    }

    pub fn scan(&self, element: &T) -> Option<NodeRef<'_, T, Color, C>> {
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

    /// `-1` when empty, otherwise the height of the root.
    pub fn height(&self) -> i32 {
        self.core.height()
    }

    pub fn root(&self) -> Result<NodeRef<'_, T, Color, C>, TreeError> {
        self.core.root()
    }

    pub fn first(&self) -> Result<&T, TreeError> {
        self.core.first()
    }

    pub fn last(&self) -> Result<&T, TreeError> {
        self.core.last()
    }

    /// Node created by the most recent insert, wherever rebalancing put it.
    pub fn last_inserted(&self) -> Option<NodeRef<'_, T, Color, C>> {
        self.core.last_inserted()
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, Color, C>> {
        self.core.node(id)
    }

    pub fn iter(&self) -> Iter<'_, T, Color> {
        self.core.iter()
    }

    pub fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Color, C>),
    {
        self.core.dfs_pre_order(visit)
    }

    pub fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Color, C>),
    {
        self.core.dfs_in_order(visit)
    }

    pub fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Color, C>),
    {
        self.core.dfs_post_order(visit)
    }

    pub fn bfs<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a, T, Color, C>),
    {
        self.core.bfs(visit)
    }

    /// Always fails: rotating a red-black tree from outside breaks its balance.
    pub fn rotate_left(&mut self, _node: NodeId) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation(
            "red-black trees cannot be rotated left by callers",
        ))
    }

    /// Always fails: rotating a red-black tree from outside breaks its balance.
    pub fn rotate_right(&mut self, _node: NodeId) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation(
            "red-black trees cannot be rotated right by callers",
        ))
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_red_black_tree(
            self.core.nodes(),
            self.core.root_index(),
            self.core.comparator(),
        )?;
        self.core.assert_ordered()
    }
}

impl<T, C> Collection<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Iter<'a>
        = Iter<'a, T, Color>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, element: T) {
        RbTree::insert(self, element);
    }

    fn remove(&mut self, element: &T) -> Option<T> {
        RbTree::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        RbTree::contains(self, element)
    }

    fn len(&self) -> usize {
        RbTree::len(self)
    }

    fn clear(&mut self) {
        RbTree::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        RbTree::iter(self)
    }
}

impl<T, C> SearchTree<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Handle<'a>
        = NodeRef<'a, T, Color, C>
    where
        Self: 'a;

    fn search(&self, element: &T) -> Option<Self::Handle<'_>> {
        RbTree::search(self, element)
    }

    fn height(&self) -> i32 {
        RbTree::height(self)
    }

    fn last_inserted(&self) -> Option<Self::Handle<'_>> {
        RbTree::last_inserted(self)
    }

    fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        RbTree::rotate_left(self, node)
    }

    fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        RbTree::rotate_right(self, node)
    }

    fn dfs_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        RbTree::dfs_pre_order(self, visit)
    }

    fn dfs_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        RbTree::dfs_in_order(self, visit)
    }

    fn dfs_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(Self::Handle<'a>),
    {
        RbTree::dfs_post_order(self, visit)
    }
}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: PartialEq, C> PartialEq for RbTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.core, f)
    }
}

impl<T, C> fmt::Display for RbTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core.render("RbTree"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre_order(t: &RbTree<i32>) -> Vec<(i32, Color)> {
        let mut out = Vec::new();
        t.dfs_pre_order(|n| out.push((*n.element(), n.color())));
        out
    }

    use Color::{Black as B, Red as R};

    #[test]
    fn ascending_three_rotates_to_black_root() {
        let t: RbTree<i32> = [10, 20, 30].into_iter().collect();
        let root = t.root().unwrap();
        assert_eq!(*root.element(), 20);
        assert_eq!(root.color(), B);
        assert_eq!(root.left().unwrap().color(), R);
        assert_eq!(root.right().unwrap().color(), R);
        assert_eq!(*root.left().unwrap().element(), 10);
        assert_eq!(*root.right().unwrap().element(), 30);
        t.assert_valid().unwrap();
    }

    #[test]
    fn ascending_seven_shape() {
        let t: RbTree<i32> = (1..=7).collect();
        assert_eq!(
            pre_order(&t),
            vec![(2, B), (1, B), (4, R), (3, B), (6, B), (5, R), (7, R)]
        );
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_minimum_after_ascending_seven() {
        let mut t: RbTree<i32> = (1..=7).collect();
        assert_eq!(t.remove(&1), Some(1));
        t.assert_valid().unwrap();
        assert_eq!(
            pre_order(&t),
            vec![(4, B), (2, B), (3, R), (6, B), (5, R), (7, R)]
        );
        assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn zig_zag_insert() {
        let t: RbTree<i32> = [30, 10, 20].into_iter().collect();
        assert_eq!(pre_order(&t), vec![(20, B), (10, R), (30, R)]);
        let t: RbTree<i32> = [10, 30, 20].into_iter().collect();
        assert_eq!(pre_order(&t), vec![(20, B), (10, R), (30, R)]);
    }

    #[test]
    fn remove_last_element_leaves_empty_tree() {
        let mut t = RbTree::new();
        t.insert(1);
        assert_eq!(t.remove(&1), Some(1));
        assert!(t.is_empty());
        assert_eq!(t.height(), -1);
        assert!(t.root().is_err());
        t.assert_valid().unwrap();

        // Slots released by the stand-in child are reused.
        t.insert(2);
        assert_eq!(t.color_of(&2), Some(B));
    }

    #[test]
    fn remove_red_leaf_needs_no_fix_up() {
        let mut t: RbTree<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(t.remove(&30), Some(30));
        assert_eq!(pre_order(&t), vec![(20, B), (10, R)]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_everything_in_mixed_order() {
        let mut t: RbTree<i32> = (0..32).collect();
        for v in (0..32).step_by(3).chain((0..32).rev()) {
            let expected = t.contains(&v).then_some(v);
            assert_eq!(t.remove(&v), expected);
            t.assert_valid().unwrap();
        }
        assert!(t.is_empty());
    }

    #[test]
    fn external_rotation_is_unsupported() {
        let mut t: RbTree<i32> = (1..=3).collect();
        let root = t.root().unwrap().id();
        assert!(matches!(
            t.rotate_left(root),
            Err(TreeError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            SearchTree::rotate_right(&mut t, root),
            Err(TreeError::UnsupportedOperation(_))
        ));
        t.assert_valid().unwrap();
    }

    #[test]
    fn last_inserted_survives_fix_up() {
        let mut t: RbTree<i32> = [1, 2].into_iter().collect();
        let id = t.insert(3);
        let n = t.last_inserted().unwrap();
        assert_eq!(n.id(), id);
        assert_eq!(*n.element(), 3);
        assert_eq!(n.color(), R);
    }

    #[test]
    fn display_dump() {
        let t: RbTree<i32> = (1..=3).collect();
        assert_eq!(
            t.to_string(),
            "RbTree\n└─ 2 [black]\n   ├─ L 1 [red]\n   └─ R 3 [red]"
        );
    }
}
