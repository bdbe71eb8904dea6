//! The trait every generator implements.

use std::path::Path;

use eyre::Result;
use supakit_core::{GeneratedFile, WriteResult};

/// A set of files stamped out into a directory.
pub trait Scaffold {
    /// Every file this scaffold produces, in write order.
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>>;

    /// Render all files without touching the disk.
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    /// Write all files under `output_dir`, honoring each file's overwrite rule.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = relative_path(file.as_ref());
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }
        Ok(result)
    }
}

fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}

/// Outcome of [`Scaffold::generate`].
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were created or overwritten, relative to the output directory
    pub written: Vec<String>,
    /// Files left alone because they already existed
    pub skipped: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
