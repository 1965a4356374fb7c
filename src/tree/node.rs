//! The binary tree value type

/// An immutable binary tree.
///
/// Every node owns its two child slots outright. A slot holds either
/// [`Tree::Empty`] or another node, so a tree is always finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree<T> {
    /// No subtree
    Empty,
    /// A value with its left and right subtrees
    Node {
        value: T,
        left: Box<Tree<T>>,
        right: Box<Tree<T>>,
    },
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Empty
    }
}

impl<T> Tree<T> {
    pub fn empty() -> Self {
        Tree::Empty
    }

    /// A node with two empty children
    pub fn leaf(value: T) -> Self {
        Self::node(value, Tree::Empty, Tree::Empty)
    }

    pub fn node(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Tree::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            Tree::Node { left, right, .. } => left.is_empty() && right.is_empty(),
            Tree::Empty => false,
        }
    }

    /// Apply `f` to every value, producing a new tree of the same shape.
    pub fn map<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        enum Step<'a, T, U> {
            Visit(&'a Tree<T>),
            Assemble(U),
        }

        // Values are mapped in preorder so stateful closures see a stable
        // order; subtrees are assembled bottom-up from `done`.
        let mut steps = vec![Step::Visit(self)];
        let mut done: Vec<Tree<U>> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Tree::Empty) => done.push(Tree::Empty),
                Step::Visit(Tree::Node { value, left, right }) => {
                    steps.push(Step::Assemble(f(value)));
                    steps.push(Step::Visit(&**right));
                    steps.push(Step::Visit(&**left));
                }
                Step::Assemble(value) => {
                    let right = done.pop().unwrap_or_default();
                    let left = done.pop().unwrap_or_default();
                    done.push(Tree::node(value, left, right));
                }
            }
        }

        done.pop().unwrap_or_default()
    }
}

impl<T> Drop for Tree<T> {
    // Unlink children onto a heap stack so long chains do not recurse.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Tree::Node { left, right, .. } = self {
            take_children(left, right, &mut pending);
        }

        while let Some(mut tree) = pending.pop() {
            if let Tree::Node { left, right, .. } = &mut tree {
                take_children(left, right, &mut pending);
            }
        }
    }
}

fn take_children<T>(left: &mut Tree<T>, right: &mut Tree<T>, pending: &mut Vec<Tree<T>>) {
    for child in [left, right] {
        if !child.is_empty() {
            pending.push(std::mem::take(child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_empty_children() {
        assert_eq!(Tree::leaf(7), Tree::node(7, Tree::Empty, Tree::Empty));
        assert!(Tree::leaf(7).is_leaf());
        assert!(!Tree::<i32>::empty().is_leaf());
    }

    #[test]
    fn test_default_is_empty() {
        let tree: Tree<String> = Tree::default();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let a = Tree::node(1, Tree::leaf(2), Tree::Empty);
        let b = Tree::node(1, Tree::leaf(2), Tree::Empty);
        let mirrored = Tree::node(1, Tree::Empty, Tree::leaf(2));

        assert_eq!(a, b);
        assert_ne!(a, mirrored);
        assert_ne!(a, Tree::leaf(1));
    }

    #[test]
    fn test_map_preserves_shape() {
        let tree = Tree::node(1, Tree::leaf(2), Tree::node(3, Tree::Empty, Tree::leaf(4)));
        let mapped = tree.map(|v| v.to_string());

        let expected = Tree::node(
            "1".to_string(),
            Tree::leaf("2".to_string()),
            Tree::node("3".to_string(), Tree::Empty, Tree::leaf("4".to_string())),
        );
        assert_eq!(mapped, expected);
        // original untouched
        assert_eq!(tree, Tree::node(1, Tree::leaf(2), Tree::node(3, Tree::Empty, Tree::leaf(4))));
    }

    #[test]
    fn test_map_visits_in_preorder() {
        let tree = Tree::node('a', Tree::leaf('b'), Tree::leaf('c'));
        let mut seen = Vec::new();
        let _ = tree.map(|v| seen.push(*v));
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_long_chain_maps_and_drops() {
        let mut chain = Tree::Empty;
        for value in 0..200_000u32 {
            chain = Tree::node(value, chain, Tree::Empty);
        }

        let mapped = chain.map(|v| u64::from(*v) + 1);
        match &mapped {
            Tree::Node { value, left, .. } => {
                assert_eq!(*value, 200_000);
                assert!(!left.is_empty());
            }
            Tree::Empty => panic!("mapped chain is empty"),
        }

        drop(chain);
        drop(mapped);
    }

    #[test]
    fn test_map_empty() {
        let mapped = Tree::<i32>::Empty.map(|v| v * 2);
        assert_eq!(mapped, Tree::Empty);
    }
}
