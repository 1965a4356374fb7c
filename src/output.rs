//! Tree rendering with box-drawing connectors

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::tree::Tree;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Connector scheme used when drawing a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// `├──` / `└──` with `│` continuation bars
    #[default]
    Box,
    /// `└─` for every branch, no continuation bars
    Compact,
}

struct Glyphs {
    branch: &'static str,
    last: &'static str,
    bar: &'static str,
    space: &'static str,
}

impl RenderStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            RenderStyle::Box => Glyphs {
                branch: "├── ",
                last: "└── ",
                bar: "│   ",
                space: "    ",
            },
            RenderStyle::Compact => Glyphs {
                branch: "└─ ",
                last: "└─ ",
                bar: "   ",
                space: "   ",
            },
        }
    }
}

/// Render a tree with the default box style.
pub fn render<T: fmt::Display>(tree: &Tree<T>) -> String {
    render_with_style(tree, RenderStyle::Box)
}

/// Render a tree, one node per line, without a trailing newline.
///
/// An empty tree renders as an empty string.
pub fn render_with_style<T: fmt::Display>(tree: &Tree<T>, style: RenderStyle) -> String {
    let glyphs = style.glyphs();
    let mut lines = Vec::new();
    let mut pending = Vec::new();

    if let Tree::Node { value, left, right } = tree {
        lines.push(value.to_string());
        push_children(&**left, &**right, String::new(), &mut pending);
    }

    // explicit stack so skewed trees never exhaust the call stack
    while let Some(Pending { node, prefix, is_last }) = pending.pop() {
        let Tree::Node { value, left, right } = node else {
            continue;
        };

        let connector = if is_last { glyphs.last } else { glyphs.branch };
        lines.push(format!("{prefix}{connector}{value}"));

        let child_prefix = format!("{}{}", prefix, if is_last { glyphs.space } else { glyphs.bar });
        push_children(&**left, &**right, child_prefix, &mut pending);
    }

    lines.join("\n")
}

struct Pending<'a, T> {
    node: &'a Tree<T>,
    prefix: String,
    is_last: bool,
}

/// Queue the present children; the left one is pushed last so it renders first.
fn push_children<'a, T>(
    left: &'a Tree<T>,
    right: &'a Tree<T>,
    prefix: String,
    pending: &mut Vec<Pending<'a, T>>,
) {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => {}
        (false, true) => pending.push(Pending { node: left, prefix, is_last: true }),
        (true, false) => pending.push(Pending { node: right, prefix, is_last: true }),
        (false, false) => {
            pending.push(Pending {
                node: right,
                prefix: prefix.clone(),
                is_last: true,
            });
            pending.push(Pending {
                node: left,
                prefix,
                is_last: false,
            });
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Write a rendering to file, creating parent directories if needed
pub fn write_rendering(content: &str, output_path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    if !content.is_empty() && !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }

    Ok(())
}
