//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use bintree::{build, render, Tree};

/// A fresh, empty directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bintree-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Build from a slice and render in the default style
pub fn render_values(values: &[i64]) -> String {
    render(&build(values.iter().copied()))
}

/// A tree where every node hangs off the right of its parent
pub fn right_chain(len: usize) -> Tree<usize> {
    (0..len)
        .rev()
        .fold(Tree::Empty, |acc, v| Tree::node(v, Tree::Empty, acc))
}

/// A tree where every node hangs off the left of its parent
pub fn left_chain(len: usize) -> Tree<usize> {
    (0..len)
        .rev()
        .fold(Tree::Empty, |acc, v| Tree::node(v, acc, Tree::Empty))
}
