//! Batch rendering of value files into `.tree` files

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::input::parse_values;
use crate::output::{render_with_style, write_rendering, OutputError, RenderStyle};
use crate::tree::build;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Input path {0:?} does not exist")]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Output(#[from] OutputError),
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub style: RenderStyle,
    pub extension: String,
    pub output_dir: PathBuf,
}

/// What a batch run produced
#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub outputs: Vec<PathBuf>,
    pub trees: usize,
    /// Lines that failed to parse
    pub skipped: usize,
    /// Files that could not be read as text
    pub unreadable: usize,
}

/// Render every input file under `input`.
///
/// Each non-blank line of a file is one tree. All trees from a file are
/// written, separated by a blank line, to `<output_dir>/<rel>/<stem>.tree`
/// where `<rel>` is the file's directory relative to `input`.
pub fn run_batch(input: &Path, options: &BatchOptions) -> Result<BatchReport, BatchError> {
    if !input.exists() {
        return Err(BatchError::InputNotFound(input.to_path_buf()));
    }

    let mut report = BatchReport::default();

    for file_path in find_input_files(input, &options.extension) {
        let content = match fs::read_to_string(&file_path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read {:?}: {}", file_path, e);
                report.unreadable += 1;
                continue;
            }
        };

        let mut renderings = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_values(line) {
                Ok(values) => {
                    let tree = build(values);
                    debug!(file = ?file_path, line = line_no + 1, size = tree.size(), "built tree");
                    renderings.push(render_with_style(&tree, options.style));
                }
                Err(e) => {
                    warn!("Skipping {:?} line {}: {}", file_path, line_no + 1, e);
                    report.skipped += 1;
                }
            }
        }

        if renderings.is_empty() {
            info!("No trees in {:?}", file_path);
            continue;
        }

        let output_path = output_path_for(input, &file_path, &options.output_dir);

        write_rendering(&renderings.join("\n\n"), &output_path)?;
        debug!("wrote {} trees to {:?}", renderings.len(), output_path);

        report.trees += renderings.len();
        report.outputs.push(output_path);
    }

    Ok(report)
}

/// Mirror the file's location below `input` under `output_dir`, so equal
/// stems in different directories never share an output file.
fn output_path_for(input: &Path, file_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tree".to_string());

    let relative_dir = file_path
        .strip_prefix(input)
        .ok()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));

    output_dir.join(relative_dir).join(format!("{}.tree", stem))
}

/// Files under `input` with the given extension, in a stable order.
/// A file passed directly is used whatever its extension.
fn find_input_files(input: &Path, extension: &str) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == extension)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let options = BatchOptions {
            style: RenderStyle::Box,
            extension: "txt".to_string(),
            output_dir: PathBuf::from("unused"),
        };
        let err = run_batch(Path::new("/definitely/not/here"), &options).unwrap_err();
        assert!(matches!(err, BatchError::InputNotFound(_)));
    }

    #[test]
    fn test_output_path_mirrors_subdirectories() {
        let out = Path::new("out");
        assert_eq!(
            output_path_for(Path::new("in"), Path::new("in/a/x.txt"), out),
            PathBuf::from("out/a/x.tree")
        );
        assert_eq!(
            output_path_for(Path::new("in"), Path::new("in/b/x.txt"), out),
            PathBuf::from("out/b/x.tree")
        );
        assert_eq!(
            output_path_for(Path::new("in"), Path::new("in/top.txt"), out),
            PathBuf::from("out/top.tree")
        );
    }

    #[test]
    fn test_output_path_for_single_file_input() {
        // strip_prefix of a file by itself leaves an empty path with no parent
        assert_eq!(
            output_path_for(Path::new("data/v.txt"), Path::new("data/v.txt"), Path::new("out")),
            PathBuf::from("out/v.tree")
        );
    }
}
