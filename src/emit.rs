//! Write the AsciiDoc include files.

use crate::buffers::{Category, SyncBuffers};
use crate::conventions::Conventions;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Delimiter bracketing the sidebar block in each include.
const BLOCK_DELIMITER: &str = "****";

/// Build a complete include file for one category.
pub fn render_include(warning_comment: &str, category: Category, body: &str) -> String {
    let mut out = String::new();
    out.push_str(warning_comment);
    out.push('\n');
    out.push('.');
    out.push_str(category.title());
    out.push('\n');
    out.push_str(BLOCK_DELIMITER);
    out.push('\n');
    out.push_str(body);
    out.push_str(BLOCK_DELIMITER);
    out.push('\n');
    out.push('\n');
    out
}

/// Rewrite every enabled include in `dir` from the full buffer contents.
///
/// Returns the paths written, in category order.
pub fn write_includes(
    dir: &Path,
    buffers: &SyncBuffers,
    conventions: &dyn Conventions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for category in Category::ALL {
        let Some(body) = buffers.get(category).contents() else {
            continue;
        };
        let path = dir.join(category.file_name());
        debug!(path = %path.display(), "Generating include file");

        let content = render_include(conventions.warning_comment(), category, body);
        fs::write(&path, content).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::ApiConventions;
    use tempfile::TempDir;

    #[test]
    fn empty_buffer_renders_markup_only() {
        let out = render_include("// gen", Category::Parameters, "");
        assert_eq!(out, "// gen\n.Externally Synchronized Parameters\n****\n****\n\n");
    }

    #[test]
    fn body_is_written_verbatim() {
        let out = render_include("// gen", Category::Implicit, "* A in flink:f\n");
        assert_eq!(
            out,
            "// gen\n.Implicit Externally Synchronized Parameters\n****\n* A in flink:f\n****\n\n"
        );
    }

    #[test]
    fn writes_enabled_categories_only() {
        let dir = TempDir::new().unwrap();
        let mut buffers = SyncBuffers::with_disabled(&[Category::ParameterLists]);
        buffers.append(Category::Parameters, "* The pname:fence parameter in flink:f\n");

        let written = write_includes(dir.path(), &buffers, &ApiConventions::default()).unwrap();
        assert_eq!(
            written,
            vec![
                dir.path().join("parameters.txt"),
                dir.path().join("implicit.txt"),
            ]
        );
        assert!(!dir.path().join("parameterlists.txt").exists());

        let params = fs::read_to_string(dir.path().join("parameters.txt")).unwrap();
        assert!(params.starts_with("// WARNING: DO NOT MODIFY!"));
        assert!(params.contains("****\n* The pname:fence parameter in flink:f\n****\n\n"));
    }

    #[test]
    fn rewrite_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let conv = ApiConventions::default();
        let mut buffers = SyncBuffers::default();
        buffers.append(Category::Implicit, "* One in flink:a\n");
        write_includes(dir.path(), &buffers, &conv).unwrap();
        buffers.append(Category::Implicit, "* Two in flink:b\n");
        write_includes(dir.path(), &buffers, &conv).unwrap();

        let implicit = fs::read_to_string(dir.path().join("implicit.txt")).unwrap();
        assert_eq!(implicit.matches("* One in flink:a\n").count(), 1);
        assert!(implicit.contains("* One in flink:a\n* Two in flink:b\n****\n\n"));
    }

    #[test]
    fn missing_directory_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_includes(&missing, &SyncBuffers::default(), &ApiConventions::default())
            .unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, missing.join("parameters.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
