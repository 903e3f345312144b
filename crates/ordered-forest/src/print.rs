//! Box-drawing tree dumps used by the `Display` impls.

use std::fmt::Display;

use crate::tree_node::{Metadata, TreeNode};

fn node_line<T, M>(node: &TreeNode<T, M>) -> String
where
    T: Display,
    M: Metadata,
{
    let element = match &node.e {
        Some(e) => e.to_string(),
        None => "∅".to_string(),
    };
    match node.m.tag() {
        Some(tag) => format!("{element} [{tag}]"),
        None => element,
    }
}

/// One pending line of the dump.
struct Line {
    idx: u32,
    side: &'static str,
    indent: String,
    last: bool,
}

/// Full dump of the tree under `root`, headed by `name`.
///
/// Each node is one line; its children follow, prefixed `L ` / `R ` and
/// indented under a `├─` / `└─` branch. Uses an explicit stack, so
/// list-shaped trees render without deep recursion.
pub fn render<T, M>(name: &str, nodes: &[TreeNode<T, M>], root: Option<u32>) -> String
where
    T: Display,
    M: Metadata,
{
    let Some(root) = root else {
        return format!("{name} ∅");
    };

    let mut out = name.to_string();
    let mut stack = vec![Line {
        idx: root,
        side: "",
        indent: String::new(),
        last: true,
    }];

    while let Some(line) = stack.pop() {
        let node = &nodes[line.idx as usize];
        out.push('\n');
        out.push_str(&line.indent);
        out.push_str(if line.last { "└─ " } else { "├─ " });
        out.push_str(line.side);
        out.push_str(&node_line(node));

        let indent = format!("{}{}  ", line.indent, if line.last { " " } else { "│" });
        // Right is pushed first so the left branch is printed first.
        if let Some(r) = node.r {
            stack.push(Line {
                idx: r,
                side: "R ",
                indent: indent.clone(),
                last: true,
            });
        }
        if let Some(l) = node.l {
            stack.push(Line {
                idx: l,
                side: "L ",
                indent,
                last: node.r.is_none(),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(nodes: &mut [TreeNode<i32, ()>], p: u32, l: Option<u32>, r: Option<u32>) {
        nodes[p as usize].l = l;
        nodes[p as usize].r = r;
        for c in l.into_iter().chain(r) {
            nodes[c as usize].p = Some(p);
        }
    }

    #[test]
    fn render_small_tree() {
        let mut nodes: Vec<TreeNode<i32, ()>> =
            vec![TreeNode::new(2), TreeNode::new(1), TreeNode::new(3)];
        link(&mut nodes, 0, Some(1), Some(2));
        assert_eq!(
            render("Tree", &nodes, Some(0)),
            "Tree\n└─ 2\n   ├─ L 1\n   └─ R 3"
        );
        assert_eq!(render::<i32, ()>("Tree", &[], None), "Tree ∅");
    }

    #[test]
    fn render_nested_branches() {
        // 4 -> (2 -> (1, 3), 5 -> (_, 6))
        let mut nodes: Vec<TreeNode<i32, ()>> =
            [4, 2, 5, 1, 3, 6].into_iter().map(TreeNode::new).collect();
        link(&mut nodes, 0, Some(1), Some(2));
        link(&mut nodes, 1, Some(3), Some(4));
        link(&mut nodes, 2, None, Some(5));
        assert_eq!(
            render("Tree", &nodes, Some(0)),
            "Tree\n\
             └─ 4\n   \
             ├─ L 2\n   \
             │  ├─ L 1\n   \
             │  └─ R 3\n   \
             └─ R 5\n      \
             └─ R 6"
        );
    }

    #[test]
    fn render_left_only_child_closes_branch() {
        let mut nodes: Vec<TreeNode<i32, ()>> = vec![TreeNode::new(2), TreeNode::new(1)];
        link(&mut nodes, 0, Some(1), None);
        assert_eq!(render("Tree", &nodes, Some(0)), "Tree\n└─ 2\n   └─ L 1");
    }
}
