use std::cmp::Ordering;

use log::trace;

use crate::bst::{assert_ordered_tree, OrderedTree};
use crate::types::Node;

use super::types::{Color, RbNode};

#[inline]
fn is_black<T, C>(tree: &OrderedTree<T, Color, C>, node: Option<u32>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    node.map_or(true, |i| tree.meta(i).is_black())
}

#[inline]
fn is_red<T, C>(tree: &OrderedTree<T, Color, C>, node: Option<u32>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    !is_black(tree, node)
}

#[inline]
fn paint<T, C>(tree: &mut OrderedTree<T, Color, C>, node: u32, color: Color)
where
    C: Fn(&T, &T) -> Ordering,
{
    *tree.meta_mut(node) = color;
}

#[inline]
fn is_left_of<T, C>(tree: &OrderedTree<T, Color, C>, node: u32, parent: u32) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    tree.left_of(parent) == Some(node)
}

fn sibling<T, C>(tree: &OrderedTree<T, Color, C>, node: u32, parent: u32) -> Option<u32>
where
    C: Fn(&T, &T) -> Ordering,
{
    if is_left_of(tree, node, parent) {
        tree.right_of(parent)
    } else {
        tree.left_of(parent)
    }
}

/// Repairs a red-red violation introduced by attaching the red node `n`.
pub(crate) fn fix_insert<T, C>(tree: &mut OrderedTree<T, Color, C>, mut n: u32)
where
    C: Fn(&T, &T) -> Ordering,
{
    loop {
        let Some(mut p) = tree.parent_of(n) else {
            paint(tree, n, Color::Black);
            return;
        };
        if is_black(tree, Some(p)) {
            return;
        }

        // A red parent is never the root.
        let g = tree.parent_of(p).expect("red node has a parent");
        let u = sibling(tree, p, g);
        if is_red(tree, u) {
            trace!("rb: red uncle above node {n}, recoloring");
            let u = u.expect("red uncle exists");
            paint(tree, p, Color::Black);
            paint(tree, u, Color::Black);
            paint(tree, g, Color::Red);
            n = g;
            continue;
        }

        let p_left = is_left_of(tree, p, g);
        if p_left && !is_left_of(tree, n, p) {
            trace!("rb: inner grandchild {n}, rotating parent {p} left");
            tree.rotate_left_at(p);
            std::mem::swap(&mut n, &mut p);
        } else if !p_left && is_left_of(tree, n, p) {
            trace!("rb: inner grandchild {n}, rotating parent {p} right");
            tree.rotate_right_at(p);
            std::mem::swap(&mut n, &mut p);
        }

        paint(tree, p, Color::Black);
        paint(tree, g, Color::Red);
        if is_left_of(tree, n, p) {
            trace!("rb: rotating grandparent {g} right");
            tree.rotate_right_at(g);
        } else {
            trace!("rb: rotating grandparent {g} left");
            tree.rotate_left_at(g);
        }
        return;
    }
}

/// Removes the extra black carried by `v` after a black node was spliced
/// out above it. `v` may be an element-less placeholder.
pub(crate) fn fix_remove<T, C>(tree: &mut OrderedTree<T, Color, C>, mut v: u32)
where
    C: Fn(&T, &T) -> Ordering,
{
    loop {
        let Some(p) = tree.parent_of(v) else {
            paint(tree, v, Color::Black);
            return;
        };

        let mut s = sibling(tree, v, p).expect("double-black node has a sibling");
        if is_red(tree, Some(s)) {
            trace!("rb: red sibling {s}, rotating parent {p} toward {v}");
            paint(tree, p, Color::Red);
            paint(tree, s, Color::Black);
            if is_left_of(tree, v, p) {
                tree.rotate_left_at(p);
            } else {
                tree.rotate_right_at(p);
            }
            s = sibling(tree, v, p).expect("double-black node has a sibling");
        }

        let sl = tree.left_of(s);
        let sr = tree.right_of(s);
        if is_black(tree, sl) && is_black(tree, sr) {
            paint(tree, s, Color::Red);
            if is_black(tree, Some(p)) {
                trace!("rb: black family around {v}, moving up to {p}");
                v = p;
                continue;
            }
            trace!("rb: red parent {p} absorbs the extra black");
            paint(tree, p, Color::Black);
            return;
        }

        let v_left = is_left_of(tree, v, p);
        if v_left && is_red(tree, sl) && is_black(tree, sr) {
            trace!("rb: near nephew red, rotating sibling {s} right");
            paint(tree, s, Color::Red);
            paint(tree, sl.expect("red nephew exists"), Color::Black);
            tree.rotate_right_at(s);
            s = sibling(tree, v, p).expect("double-black node has a sibling");
        } else if !v_left && is_red(tree, sr) && is_black(tree, sl) {
            trace!("rb: near nephew red, rotating sibling {s} left");
            paint(tree, s, Color::Red);
            paint(tree, sr.expect("red nephew exists"), Color::Black);
            tree.rotate_left_at(s);
            s = sibling(tree, v, p).expect("double-black node has a sibling");
        }

        let p_color = *tree.meta(p);
        paint(tree, s, p_color);
        paint(tree, p, Color::Black);
        if v_left {
            let far = tree.right_of(s).expect("far nephew is red");
            paint(tree, far, Color::Black);
            trace!("rb: far nephew red, rotating parent {p} left");
            tree.rotate_left_at(p);
        } else {
            let far = tree.left_of(s).expect("far nephew is red");
            paint(tree, far, Color::Black);
            trace!("rb: far nephew red, rotating parent {p} right");
            tree.rotate_right_at(p);
        }
        return;
    }
}

fn black_height<T>(nodes: &[RbNode<T>], node: Option<u32>) -> Result<usize, String> {
    let Some(node) = node else {
        return Ok(0);
    };

    let n = &nodes[node as usize];
    let l = n.l();
    let r = n.r();

    if n.m.is_red() {
        if l.map(|i| nodes[i as usize].m.is_red()).unwrap_or(false) {
            return Err(format!("Red node {node} has red left child"));
        }
        if r.map(|i| nodes[i as usize].m.is_red()).unwrap_or(false) {
            return Err(format!("Red node {node} has red right child"));
        }
    }

    let lh = black_height(nodes, l)?;
    let rh = black_height(nodes, r)?;
    if lh != rh {
        return Err(format!("Black height mismatch at node {node}: {lh} vs {rh}"));
    }

    Ok(lh + usize::from(n.m.is_black()))
}

/// Checks links, ordering, a black root, no red node with a red child and
/// equal black height on every path.
pub fn assert_red_black_tree<T, C>(
    nodes: &[RbNode<T>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&T, &T) -> Ordering,
{
    assert_ordered_tree(nodes, root, comparator)?;

    let Some(root) = root else {
        return Ok(());
    };
    if !nodes[root as usize].m.is_black() {
        return Err("Root is not black".to_string());
    }

    black_height(nodes, Some(root))?;
    Ok(())
}
