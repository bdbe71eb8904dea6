use std::path::{Path, PathBuf};

use crate::{
    Error, Result, extract,
    diagnostic::{Diagnostic, DiagnosticSink},
    types::{ExtractOptions, Extraction},
};

/// A generated type-definitions file loaded into memory.
#[derive(Debug, Clone)]
pub struct TypesSource {
    path: PathBuf,
    content: String,
}

impl TypesSource {
    /// Load a types file. A missing path is `Error::NotFound`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Box::new(Error::NotFound { path }));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(Error::Read {
                path: path.clone(),
                source,
            })
        })?;

        Ok(Self { path, content })
    }

    /// Like [`TypesSource::open`], but an unreadable file is reported to `sink`
    /// and replaced by an empty source, which extracts to empty maps.
    ///
    /// A missing file is still an error.
    pub fn open_or_report(path: impl AsRef<Path>, sink: &mut dyn DiagnosticSink) -> Result<Self> {
        match Self::open(path) {
            Err(err) => match *err {
                Error::Read { path, source } => {
                    sink.report(
                        Diagnostic::error(format!("failed to read types file: {source}"))
                            .at(path.display().to_string()),
                    );
                    Ok(Self {
                        path,
                        content: String::new(),
                    })
                }
                other => Err(Box::new(other)),
            },
            ok => ok,
        }
    }

    /// Build a source from in-memory text.
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Run both extraction passes over the file content.
    pub fn extract(&self, options: &ExtractOptions, sink: &mut dyn DiagnosticSink) -> Extraction {
        extract(&self.content, options, sink)
    }
}
