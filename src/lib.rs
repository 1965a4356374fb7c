//! Immutable binary trees built from flat sequences.
//!
//! [`build`] shapes a sequence into a complete binary tree using 1-based
//! heap indices. [`preorder`], [`depth`], [`size`] and [`render`] are pure
//! read-only operations over the result.
//!
//! ```
//! use bintree::{build, render};
//!
//! let tree = build([1, 2, 3, 4, 5]);
//! assert_eq!(tree.preorder(), vec![1, 2, 4, 5, 3]);
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(render(&tree), "1\n├── 2\n│   ├── 4\n│   └── 5\n└── 3");
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod input;
pub mod output;
pub mod tree;

pub use output::{render, render_with_style, RenderStyle};
pub use tree::{build, depth, is_complete, preorder, size, Tree, TreeBuilder};
