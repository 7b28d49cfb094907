//! Persisting the default document as `input_config.ini`.

use crate::defaults::{DefaultConfigDocument, DEFAULT_DOCUMENT};
use crate::error::ConfigError;
use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name the emulator reads its key bindings from.
pub const INPUT_CONFIG_FILE: &str = "input_config.ini";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    /// The file already existed and was left as is.
    Kept,
}

impl Display for WriteOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Overwritten => "overwrote",
            WriteOutcome::Kept => "kept",
        };
        f.write_str(s)
    }
}

pub struct ConfigWriter {
    path: PathBuf,
    overwrite: bool,
}

impl Default for ConfigWriter {
    fn default() -> Self {
        Self::new(INPUT_CONFIG_FILE)
    }
}

impl ConfigWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            overwrite: false,
        }
    }

    pub fn overwrite(&mut self, overwrite: bool) -> &mut Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `doc` to the target path.
    ///
    /// An existing file is only replaced when overwriting was requested,
    /// otherwise it is left untouched and `WriteOutcome::Kept` is returned.
    /// The target never holds a partially written document.
    pub fn write(&self, doc: &DefaultConfigDocument) -> Result<WriteOutcome, ConfigError> {
        let outcome = self.write_with(|w| doc.write_to(w))?;

        if outcome == WriteOutcome::Kept {
            tracing::debug!(path = %self.path.display(), "input config exists, keeping it");
        } else {
            tracing::info!(
                path = %self.path.display(),
                lines = doc.len(),
                %outcome,
                "wrote default input config"
            );
        }

        Ok(outcome)
    }

    fn write_with<F>(&self, fill: F) -> Result<WriteOutcome, ConfigError>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> io::Result<()>,
    {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        // staged next to the target so the final rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        {
            let mut w = BufWriter::new(staged.as_file_mut());
            fill(&mut w).map_err(|e| self.io_error(e))?;
            w.flush().map_err(|e| self.io_error(e))?;
        }

        match staged.persist_noclobber(&self.path) {
            Ok(_) => Ok(WriteOutcome::Created),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                self.ensure_regular_file()?;
                if !self.overwrite {
                    return Ok(WriteOutcome::Kept);
                }
                e.file
                    .persist(&self.path)
                    .map_err(|e| self.io_error(e.error))?;
                Ok(WriteOutcome::Overwritten)
            }
            Err(e) => Err(self.io_error(e.error)),
        }
    }

    /// Fails unless the target resolves to a regular file.
    fn ensure_regular_file(&self) -> Result<(), ConfigError> {
        match fs::metadata(&self.path) {
            Ok(m) if m.is_file() => Ok(()),
            Ok(_) => Err(self.io_error(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "path exists and is not a regular file",
            ))),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Creates `path` from the built-in defaults unless it already exists.
pub fn ensure_default_config<P: AsRef<Path>>(path: P) -> Result<WriteOutcome, ConfigError> {
    ConfigWriter::new(path).write(&DEFAULT_DOCUMENT)
}
