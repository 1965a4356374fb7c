//! Binary tree type and its structural operations

mod builder;
mod node;
mod traversal;

pub use builder::{build, TreeBuilder};
pub use node::Tree;
pub use traversal::{depth, is_complete, preorder, size};
