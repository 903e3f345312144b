//! Slot arena owning every node of a tree.
//!
//! Nodes refer to each other by `u32` slot index, so parent links never keep
//! anything alive. Released slots go on a free list and are handed out again
//! by the next [`Arena::alloc`].

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub struct Arena<N> {
    nodes: Vec<N>,
    free: Vec<u32>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores `node`, reusing a released slot when one is available.
    pub fn alloc(&mut self, node: N) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Returns `idx` to the free list. The caller must already have unlinked
    /// the node from every neighbour.
    pub fn release(&mut self, idx: u32) {
        debug_assert!((idx as usize) < self.nodes.len());
        debug_assert!(!self.free.contains(&idx), "slot {idx} released twice");
        self.free.push(idx);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
    }

    /// Number of slots ever allocated, live or vacant.
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    /// Number of slots waiting on the free list.
    pub fn vacant(&self) -> usize {
        self.free.len()
    }

    pub fn contains(&self, idx: u32) -> bool {
        (idx as usize) < self.nodes.len()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [N] {
        &mut self.nodes
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        &self.nodes[idx as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        &mut self.nodes[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!((a, b), (0, 1));

        arena.release(a);
        assert_eq!(arena.vacant(), 1);
        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(arena[c], "c");
        assert_eq!(arena.slots(), 2);
        assert_eq!(arena.vacant(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = Arena::with_capacity(4);
        arena.alloc(1);
        arena.alloc(2);
        arena.release(0);
        arena.clear();
        assert_eq!(arena.slots(), 0);
        assert_eq!(arena.vacant(), 0);
        assert_eq!(arena.alloc(3), 0);
    }
}
