use std::cmp::Ordering;

use log::trace;

use crate::bst::{assert_ordered_tree, OrderedTree};
use crate::types::Node;

use super::types::{AvlNode, Height};

#[inline]
fn height_of<T, C>(tree: &OrderedTree<T, Height, C>, node: Option<u32>) -> i32
where
    C: Fn(&T, &T) -> Ordering,
{
    node.map_or(Height::ABSENT.0, |i| tree.meta(i).0)
}

#[inline]
fn update_height<T, C>(tree: &mut OrderedTree<T, Height, C>, node: u32)
where
    C: Fn(&T, &T) -> Ordering,
{
    let l = height_of(tree, tree.left_of(node));
    let r = height_of(tree, tree.right_of(node));
    *tree.meta_mut(node) = Height(1 + l.max(r));
}

/// `height(left) - height(right)`.
#[inline]
pub(crate) fn balance<T, C>(tree: &OrderedTree<T, Height, C>, node: u32) -> i32
where
    C: Fn(&T, &T) -> Ordering,
{
    height_of(tree, tree.left_of(node)) - height_of(tree, tree.right_of(node))
}

/// Restores the height-balance invariant on the path from `from` to the root.
///
/// Deletion may need a rotation at several ancestors, so the walk always
/// runs up to the root.
pub(crate) fn rebalance<T, C>(tree: &mut OrderedTree<T, Height, C>, from: Option<u32>)
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut curr = from;
    while let Some(n) = curr {
        update_height(tree, n);
        let b = balance(tree, n);

        if b == 2 {
            let l = tree.left_of(n).expect("left-heavy node has a left child");
            if balance(tree, l) == -1 {
                trace!("avl: zig-zag below node {n}, rotating left child {l}");
                tree.rotate_left_at(l);
                update_height(tree, l);
                let top = tree.parent_of(l).expect("rotated node has a parent");
                update_height(tree, top);
            }
            trace!("avl: node {n} left-heavy, rotating right");
            tree.rotate_right_at(n);
            update_height(tree, n);
        } else if b == -2 {
            let r = tree.right_of(n).expect("right-heavy node has a right child");
            if balance(tree, r) == 1 {
                trace!("avl: zig-zag below node {n}, rotating right child {r}");
                tree.rotate_right_at(r);
                update_height(tree, r);
                let top = tree.parent_of(r).expect("rotated node has a parent");
                update_height(tree, top);
            }
            trace!("avl: node {n} right-heavy, rotating left");
            tree.rotate_left_at(n);
            update_height(tree, n);
        }

        // After a rotation the parent is the new subtree root; its height is
        // refreshed on the next iteration.
        curr = tree.parent_of(n);
    }
}

fn subtree_height<T>(nodes: &[AvlNode<T>], node: Option<u32>) -> Result<i32, String> {
    let Some(i) = node else {
        return Ok(-1);
    };
    let n = &nodes[i as usize];
    let lh = subtree_height(nodes, n.l())?;
    let rh = subtree_height(nodes, n.r())?;

    let expected = 1 + lh.max(rh);
    if n.m.0 != expected {
        return Err(format!(
            "Height mismatch at node {i}: expected {expected}, got {}",
            n.m.0
        ));
    }
    if (lh - rh).abs() > 1 {
        return Err(format!("AVL balance violated at node {i}: {}", lh - rh));
    }
    Ok(expected)
}

/// Checks links, ordering, cached heights and the AVL balance bound.
pub fn assert_avl_tree<T, C>(
    nodes: &[AvlNode<T>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&T, &T) -> Ordering,
{
    assert_ordered_tree(nodes, root, comparator)?;
    subtree_height(nodes, root)?;
    Ok(())
}
