//! Read-only derived operations over trees

use std::collections::VecDeque;

use super::Tree;

// Every walk below keeps its own stack on the heap, so skewed trees are
// bounded by memory rather than by the call stack.

/// Values in root, left, right order.
pub fn preorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = vec![tree];

    while let Some(current) = stack.pop() {
        if let Tree::Node { value, left, right } = current {
            out.push(value.clone());
            stack.push(right);
            stack.push(left);
        }
    }

    out
}

/// Number of levels; an empty tree has depth 0, a single node depth 1.
pub fn depth<T>(tree: &Tree<T>) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(tree, 1)];

    while let Some((current, level)) = stack.pop() {
        if let Tree::Node { left, right, .. } = current {
            deepest = deepest.max(level);
            stack.push((&**left, level + 1));
            stack.push((&**right, level + 1));
        }
    }

    deepest
}

/// Total node count.
pub fn size<T>(tree: &Tree<T>) -> usize {
    let mut count = 0;
    let mut stack = vec![tree];

    while let Some(current) = stack.pop() {
        if let Tree::Node { left, right, .. } = current {
            count += 1;
            stack.push(left);
            stack.push(right);
        }
    }

    count
}

/// Whether every level is full except possibly the last, which is filled
/// from the left.
///
/// Scans in level order: once an empty slot is seen, no node may follow.
pub fn is_complete<T>(tree: &Tree<T>) -> bool {
    let mut queue = VecDeque::new();
    queue.push_back(tree);
    let mut seen_gap = false;

    while let Some(current) = queue.pop_front() {
        match current {
            Tree::Empty => seen_gap = true,
            Tree::Node { left, right, .. } => {
                if seen_gap {
                    return false;
                }
                queue.push_back(left);
                queue.push_back(right);
            }
        }
    }

    true
}

impl<T> Tree<T> {
    pub fn depth(&self) -> usize {
        depth(self)
    }

    pub fn size(&self) -> usize {
        size(self)
    }

    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }
}

impl<T: Clone> Tree<T> {
    pub fn preorder(&self) -> Vec<T> {
        preorder(self)
    }
}
