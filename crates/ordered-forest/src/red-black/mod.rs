//! Red-black tree.

#[path = "RbTree.rs"]
pub mod rb_tree;
pub mod types;
pub mod util;

pub use rb_tree::RbTree;
pub use types::{Color, RbNode};
pub use util::assert_red_black_tree;
