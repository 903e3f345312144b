//! Link-level helpers shared by every tree variant.
//!
//! All functions take the node slice of an arena plus `u32` indices and only
//! touch the `p` / `l` / `r` links. None of them recurse, so a degenerate
//! (list-shaped) unbalanced tree is walked without growing the call stack.

use std::collections::VecDeque;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points `p`'s link that currently holds `old` at `new`.
pub(crate) fn replace_child<N: Node>(arena: &mut [N], p: u32, old: u32, new: Option<u32>) {
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Height of the subtree rooted at `node`: `-1` when absent, `0` for a leaf.
pub fn height<N: Node>(arena: &[N], node: Option<u32>) -> i32 {
    let mut level = -1;
    let mut queue: VecDeque<u32> = node.into_iter().collect();
    while !queue.is_empty() {
        level += 1;
        for _ in 0..queue.len() {
            let i = queue.pop_front().expect("level is non-empty");
            queue.extend(get_l(arena, i));
            queue.extend(get_r(arena, i));
        }
    }
    level
}

/// Number of edges between `node` and the root.
pub fn depth<N: Node>(arena: &[N], mut node: u32) -> usize {
    let mut d = 0;
    while let Some(p) = get_p(arena, node) {
        d += 1;
        node = p;
    }
    d
}

/// Pivots `n` below its right child. Returns the (possibly new) root.
///
/// A node without a right child is left untouched.
pub fn rotate_left<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let Some(r) = get_r(arena, n) else {
        return root;
    };
    let p = get_p(arena, n);
    let rl = get_l(arena, r);

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_p(arena, r, p);

    match p {
        Some(p) => {
            replace_child(arena, p, n, Some(r));
            root
        }
        None => r,
    }
}

/// Pivots `n` below its left child. Returns the (possibly new) root.
///
/// A node without a left child is left untouched.
pub fn rotate_right<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let Some(l) = get_l(arena, n) else {
        return root;
    };
    let p = get_p(arena, n);
    let lr = get_r(arena, l);

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_p(arena, l, p);

    match p {
        Some(p) => {
            replace_child(arena, p, n, Some(l));
            root
        }
        None => l,
    }
}

/// Checks parent/child link symmetry under `root`. Returns the node count.
pub fn assert_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<usize, String> {
    let Some(root) = root else {
        return Ok(0);
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut count = 0;
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        count += 1;
        if count > arena.len() {
            return Err("Cycle in child links".to_string());
        }
        if let Some(l) = get_l(arena, i) {
            if get_p(arena, l) != Some(i) {
                return Err(format!("Broken parent link on left child of node {i}"));
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            if get_p(arena, r) != Some(i) {
                return Err(format!("Broken parent link on right child of node {i}"));
            }
            stack.push(r);
        }
    }
    Ok(count)
}
