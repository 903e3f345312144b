use std::fmt;

use crate::tree_node::{Metadata, TreeNode};

/// Cached subtree height of an AVL node: `0` for a leaf, `-1` stands for an
/// absent subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(pub i32);

impl Height {
    pub const ABSENT: Height = Height(-1);
}

impl Metadata for Height {
    fn fresh() -> Self {
        Height(0)
    }

    fn cached_height(&self) -> Option<i32> {
        Some(self.0)
    }

    fn tag(&self) -> Option<String> {
        Some(format!("h={}", self.0))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type AvlNode<T> = TreeNode<T, Height>;
