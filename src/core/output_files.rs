/*
 * Writing of the generated header and code file. Each generated file starts
 * with the same notice identifying the generator and its version, followed
 * by the body produced by the settings formatter. Files are written as UTF-8
 * text.
 *
 * Opening (`OutputFileOperations::open_for_write`) is separate from writing
 * (`write_generated_file`): the save controller opens both destinations
 * before it writes either of them.
 */
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const CONFIG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub static GENERATED_FILE_NOTICE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "/*  THIS FILE WAS GENERATED BY THE CONFIGURATION UTILITY.  DO NOT MODIFY.\n\
         \n    Generated by configuration utility version {CONFIG_VERSION}\n\
         */\n"
    )
});

#[derive(Debug)]
pub enum OutputError {
    Io { path: PathBuf, source: io::Error },
    EmptyPath,
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io { path, source } => {
                write!(f, "Output I/O error for {}: {source}", path.display())
            }
            OutputError::EmptyPath => write!(f, "No output path given"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io { source, .. } => Some(source),
            OutputError::EmptyPath => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;

/*
 * An output destination that has been opened for writing. The underlying
 * handle is released when the sink is dropped.
 */
pub struct OutputSink {
    path: PathBuf,
    writer: Box<dyn Write + Send + Sync>,
}

impl OutputSink {
    pub fn new(path: PathBuf, writer: Box<dyn Write + Send + Sync>) -> Self {
        OutputSink { path, writer }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

pub trait OutputFileOperations: Send + Sync {
    /*
     * Opens `path` for writing, creating the file or truncating an existing
     * one.
     */
    fn open_for_write(&self, path: &Path) -> Result<OutputSink>;
}

pub struct CoreOutputFiles {}

impl CoreOutputFiles {
    pub fn new() -> Self {
        CoreOutputFiles {}
    }
}

impl Default for CoreOutputFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFileOperations for CoreOutputFiles {
    fn open_for_write(&self, path: &Path) -> Result<OutputSink> {
        if path.as_os_str().is_empty() {
            return Err(OutputError::EmptyPath);
        }
        let file = File::create(path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::trace!("CoreOutputFiles: Opened {path:?} for writing.");
        Ok(OutputSink::new(
            path.to_path_buf(),
            Box::new(BufWriter::new(file)),
        ))
    }
}

/*
 * Writes the generated-file notice followed by `body` to `sink` and flushes
 * it. The sink is consumed so the handle is closed as soon as this returns,
 * whether or not the write succeeded.
 */
pub fn write_generated_file(mut sink: OutputSink, body: &str) -> Result<PathBuf> {
    let path = sink.path.clone();
    let write_result = sink
        .writer
        .write_all(GENERATED_FILE_NOTICE.as_bytes())
        .and_then(|_| sink.writer.write_all(body.as_bytes()))
        .and_then(|_| sink.writer.flush());

    match write_result {
        Ok(()) => {
            log::debug!(
                "OutputFiles: Wrote {} bytes of generated content to {path:?}.",
                GENERATED_FILE_NOTICE.len() + body.len()
            );
            Ok(path)
        }
        Err(source) => Err(OutputError::Io { path, source }),
    }
}
