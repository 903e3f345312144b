use std::fmt::Debug;

use crate::types::Node;

/// Per-variant payload carried by every node.
///
/// The plain tree uses `()`, the AVL tree a cached height and the red-black
/// tree a color. Linkage is identical for all three.
pub trait Metadata: Clone + Debug + PartialEq {
    /// Metadata given to a freshly inserted node.
    fn fresh() -> Self;

    /// Height stored on the node, if the variant caches one.
    fn cached_height(&self) -> Option<i32> {
        None
    }

    /// Short annotation appended to the element in tree dumps.
    fn tag(&self) -> Option<String> {
        None
    }
}

impl Metadata for () {
    fn fresh() -> Self {}
}

/// Arena node: an element slot, three links and the variant metadata.
#[derive(Clone, Debug)]
pub struct TreeNode<T, M> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // Empty for the red-black deletion sentinel and for vacated arena slots.
    pub e: Option<T>,
    pub m: M,
}

impl<T, M: Metadata> TreeNode<T, M> {
    pub fn new(e: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            e: Some(e),
            m: M::fresh(),
        }
    }
}

impl<T, M> TreeNode<T, M> {
    /// Element-less node carrying only metadata.
    pub fn placeholder(m: M) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            e: None,
            m,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}

impl<T, M> Node for TreeNode<T, M> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
