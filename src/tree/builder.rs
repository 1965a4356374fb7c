//! Tree construction from flat sequences

use super::Tree;

/// Builds complete binary trees from ordered sequences.
///
/// Positions are 1-based heap indices: the value at position `i` gets its
/// left child from position `2i` and its right child from `2i + 1`.
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn build<T, I>(values: I) -> Tree<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        Self::build_at(&mut slots, 1)
    }

    fn build_at<T>(slots: &mut [Option<T>], index: usize) -> Tree<T> {
        if index > slots.len() {
            return Tree::Empty;
        }

        // Each index is reached from exactly one parent, so the slot is still full.
        let Some(value) = slots[index - 1].take() else {
            return Tree::Empty;
        };

        let left = Self::build_at(slots, 2 * index);
        let right = Self::build_at(slots, 2 * index + 1);

        Tree::node(value, left, right)
    }
}

/// Build a complete binary tree from `values`; see [`TreeBuilder`].
pub fn build<T, I>(values: I) -> Tree<T>
where
    I: IntoIterator<Item = T>,
{
    TreeBuilder::build(values)
}
