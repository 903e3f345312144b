use std::fmt;

use crate::tree_node::{Metadata, TreeNode};

/// Node color. New nodes start red; absent children count as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl Metadata for Color {
    fn fresh() -> Self {
        Color::Red
    }

    fn tag(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Black => "black",
        })
    }
}

pub type RbNode<T> = TreeNode<T, Color>;
