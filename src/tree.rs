//! Unbalanced binary search tree, used as a sort.
//!
//! Rows are inserted one at a time; a row whose key is less than or equal to a
//! node's key goes left, a greater one goes right. Nothing is ever rebalanced,
//! so already sorted input makes a tree that is one long chain, and costs
//! quadratic time to build. An in-order walk then yields the rows in
//! ascending order.
//!
//! ```
//! use rowsort::comp::Comparator;
//! use rowsort::row::Row;
//! use rowsort::tree::Tree;
//! let comp = Comparator::new(0);
//! let mut t = Tree::new();
//! for x in ["m", "c", "x", "a"] {
//!     t.insert(Row::from([x]), &comp);
//! }
//! assert_eq!(t.len(), 4);
//! assert_eq!(t.height(), 3);
//! let v: Vec<String> = t.into_sorted().iter().map(|r| r.to_string()).collect();
//! assert_eq!(v, ["[a]", "[c]", "[m]", "[x]"]);
//! ```

use crate::comp::Comparator;
use crate::row::Row;
use std::cmp::Ordering;

/// One node of the tree. Owns its children.
#[derive(Debug)]
struct Node {
    row: Row,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    const fn new(row: Row) -> Self {
        Self {
            row,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of rows
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// new empty tree
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }
    /// number of rows inserted
    pub const fn len(&self) -> usize {
        self.len
    }
    /// no rows?
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Add a row. Equal keys go to the left.
    pub fn insert(&mut self, row: Row, comp: &Comparator) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if comp.comp(&row, &node.row) == Ordering::Greater {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *slot = Some(Box::new(Node::new(row)));
        self.len += 1;
    }
    /// number of nodes on the longest path from the root, zero for an empty tree
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut todo: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = &self.root {
            todo.push((root, 1));
        }
        while let Some((node, depth)) = todo.pop() {
            max = max.max(depth);
            if let Some(x) = &node.left {
                todo.push((x, depth + 1));
            }
            if let Some(x) = &node.right {
                todo.push((x, depth + 1));
            }
        }
        max
    }
    /// In-order walk, consuming the tree : left subtree, node, right subtree.
    pub fn into_sorted(mut self) -> Vec<Row> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node>> = Vec::new();
        let mut curr = self.root.take();
        loop {
            while let Some(mut node) = curr {
                curr = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(node) => {
                    let Node { row, right, .. } = *node;
                    out.push(row);
                    curr = right;
                }
                None => break,
            }
        }
        out
    }
}

/// Drop without recursion, so a degenerate tree can't overflow the stack.
impl Drop for Tree {
    fn drop(&mut self) {
        let mut todo: Vec<Box<Node>> = Vec::new();
        if let Some(root) = self.root.take() {
            todo.push(root);
        }
        while let Some(mut node) = todo.pop() {
            if let Some(x) = node.left.take() {
                todo.push(x);
            }
            if let Some(x) = node.right.take() {
                todo.push(x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, tag: &str) -> Row {
        Row::from([key, tag])
    }

    fn tags(v: &[Row]) -> Vec<&str> {
        v.iter()
            .map(|r| std::str::from_utf8(r.get(1).unwrap()).unwrap())
            .collect()
    }

    fn build(keys: &[(&str, &str)], comp: &Comparator) -> Tree {
        let mut t = Tree::new();
        for (k, tag) in keys {
            t.insert(row(k, tag), comp);
        }
        t
    }

    #[test]
    fn empty() {
        let t = Tree::new();
        assert!(t.is_empty());
        assert_eq!(t.height(), 0);
        assert!(t.into_sorted().is_empty());
    }

    #[test]
    fn in_order() {
        let comp = Comparator::new(0);
        let t = build(
            &[("d", "1"), ("b", "2"), ("f", "3"), ("a", "4"), ("c", "5"), ("e", "6"), ("g", "7")],
            &comp,
        );
        assert_eq!(t.len(), 7);
        assert_eq!(t.height(), 3);
        assert_eq!(tags(&t.into_sorted()), ["4", "2", "5", "1", "6", "3", "7"]);
    }

    #[test]
    fn ties_go_left() {
        let comp = Comparator::new(0);
        // second and third "k" each become the left child of the previous one,
        // so they come out in reverse insertion order
        let t = build(&[("k", "1"), ("k", "2"), ("k", "3")], &comp);
        assert_eq!(t.height(), 3);
        assert_eq!(tags(&t.into_sorted()), ["3", "2", "1"]);

        // an equal key inserted under a right-moving ancestor lands to the right
        // of the smaller keys, but left of its earlier twin
        let t = build(&[("b", "1"), ("a", "2"), ("c", "3"), ("b", "4")], &comp);
        assert_eq!(tags(&t.into_sorted()), ["2", "4", "1", "3"]);
    }

    #[test]
    fn sorted_input_is_a_chain() {
        let comp = Comparator::new(0);
        let mut t = Tree::new();
        let keys: Vec<String> = (0..1000).map(|i| format!("{:04}", i)).collect();
        for k in &keys {
            t.insert(row(k, ""), &comp);
        }
        assert_eq!(t.height(), 1000);
        let out = t.into_sorted();
        let got: Vec<&[u8]> = out.iter().map(|r| r.get(0).unwrap()).collect();
        let want: Vec<&[u8]> = keys.iter().map(String::as_bytes).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn deep_tree_drops() {
        let comp = Comparator::new(0);
        let mut t = Tree::new();
        for i in (0..10_000).rev() {
            t.insert(Row::from([format!("{:06}", i).as_str()]), &comp);
        }
        assert_eq!(t.height(), 10_000);
        drop(t);
    }

    #[test]
    fn reversed_comparator() {
        let comp = Comparator::with_reverse(0, true);
        let t = build(&[("b", "1"), ("a", "2"), ("c", "3")], &comp);
        assert_eq!(tags(&t.into_sorted()), ["3", "1", "2"]);
    }
}
