//! Document sources and sinks around the merge engine.
//!
//! The engine only sees parsed documents. Reading files, the skip-missing
//! policy and writing the result live here so the merge stays pure.

use crate::config::{MergeOptions, MissingPolicy, OutputStyle};
use crate::error::{MergeError, MergeResult};
use crate::merge::{ConfigDocument, merge_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Output path that writes to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Supplies the ordered documents to merge.
pub trait DocumentSource {
    fn documents(&mut self) -> MergeResult<Vec<ConfigDocument>>;
}

/// Receives the merged document.
pub trait DocumentSink {
    fn write(&mut self, doc: &ConfigDocument) -> MergeResult<()>;
}

/// Reads JSON files in order.
#[derive(Debug, Clone)]
pub struct FileSource {
    paths: Vec<PathBuf>,
    missing: MissingPolicy,
}

impl FileSource {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            missing: MissingPolicy::default(),
        }
    }

    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    fn read(path: &Path) -> MergeResult<ConfigDocument> {
        let content = std::fs::read_to_string(path).map_err(|e| MergeError::read(path, e))?;
        serde_json::from_str(&content).map_err(|e| MergeError::parse(path, e))
    }
}

impl DocumentSource for FileSource {
    fn documents(&mut self) -> MergeResult<Vec<ConfigDocument>> {
        let mut documents = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            if !path.exists() {
                match self.missing {
                    MissingPolicy::Skip => {
                        warn!(path = %path.display(), "Input file does not exist, skipping");
                        continue;
                    }
                    MissingPolicy::Fail => return Err(MergeError::missing(path)),
                }
            }
            documents.push(Self::read(path)?);
            info!(path = %path.display(), "Merged");
        }
        Ok(documents)
    }
}

/// Writes the merged document to a file, or stdout for `-`.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    style: OutputStyle,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            style: OutputStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    fn is_stdout(&self) -> bool {
        self.path.as_os_str() == STDOUT_PATH
    }
}

impl DocumentSink for FileSink {
    fn write(&mut self, doc: &ConfigDocument) -> MergeResult<()> {
        let text = self.style.render(doc)?;
        if self.is_stdout() {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| MergeError::write(&self.path, e))?;
        } else {
            std::fs::write(&self.path, text).map_err(|e| MergeError::write(&self.path, e))?;
            info!(path = %self.path.display(), "Output written");
        }
        Ok(())
    }
}

/// In-memory documents, handed out once.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<ConfigDocument>,
}

impl MemorySource {
    pub fn new(documents: Vec<ConfigDocument>) -> Self {
        Self { documents }
    }
}

impl DocumentSource for MemorySource {
    fn documents(&mut self) -> MergeResult<Vec<ConfigDocument>> {
        Ok(std::mem::take(&mut self.documents))
    }
}

/// Keeps every document written to it.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub written: Vec<ConfigDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written document.
    pub fn last(&self) -> Option<&ConfigDocument> {
        self.written.last()
    }
}

impl DocumentSink for MemorySink {
    fn write(&mut self, doc: &ConfigDocument) -> MergeResult<()> {
        self.written.push(doc.clone());
        Ok(())
    }
}

/// Pull every document from `source`, merge them in order and hand the
/// result to `sink`.
pub fn run(
    source: &mut impl DocumentSource,
    sink: &mut impl DocumentSink,
) -> MergeResult<ConfigDocument> {
    let documents = source.documents()?;
    debug!(count = documents.len(), "Folding documents");
    let merged = merge_all(&documents);
    sink.write(&merged)?;
    Ok(merged)
}

/// Merge `inputs` into `output` using file collaborators.
pub fn merge_files(
    inputs: &[PathBuf],
    output: &Path,
    options: MergeOptions,
) -> MergeResult<ConfigDocument> {
    let mut source = FileSource::new(inputs.iter().cloned()).with_missing(options.missing);
    let mut sink = FileSink::new(output).with_style(options.style);
    run(&mut source, &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_with_memory_collaborators() {
        let mut source = MemorySource::new(vec![
            json!({"permissions": {"allow": ["Read"]}}),
            json!({"permissions": {"allow": ["Read", "Write"]}}),
        ]);
        let mut sink = MemorySink::new();

        let merged = run(&mut source, &mut sink).unwrap();
        assert_eq!(merged, json!({"permissions": {"allow": ["Read", "Write"]}}));
        assert_eq!(sink.last(), Some(&merged));
        assert_eq!(sink.written.len(), 1);
    }

    #[test]
    fn test_run_empty_source_writes_empty_object() {
        let mut source = MemorySource::default();
        let mut sink = MemorySink::new();
        run(&mut source, &mut sink).unwrap();
        assert_eq!(sink.last(), Some(&json!({})));
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct FailingSink;
        impl DocumentSink for FailingSink {
            fn write(&mut self, _doc: &ConfigDocument) -> MergeResult<()> {
                Err(MergeError::write(
                    Path::new("nowhere.json"),
                    std::io::Error::other("disk full"),
                ))
            }
        }

        let mut source = MemorySource::new(vec![json!({"a": 1})]);
        let err = run(&mut source, &mut FailingSink).unwrap_err();
        assert!(matches!(err, MergeError::Write { .. }));
    }

    #[test]
    fn test_stdout_path_detection() {
        assert!(FileSink::new("-").is_stdout());
        assert!(!FileSink::new("out.json").is_stdout());
    }
}
