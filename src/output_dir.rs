use crate::error::{GeneratorError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Create-or-skip writer rooted at the configured output directory.
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(self: &Self) -> &Path {
        &self.root
    }

    /// Never touches an existing file. A file that fails mid-write is removed
    /// so only complete files are left behind. Names that would resolve
    /// outside the root are refused.
    pub fn create_if_absent(self: &Self, file_name: &str, contents: &str) -> Result<CreateOutcome> {
        if !is_plain_file_name(file_name) {
            return Err(GeneratorError::UnsafeFileName(file_name.into()));
        }

        let path = self.root.join(file_name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Ok(CreateOutcome::AlreadyExists(path));
            }
            Err(source) => return Err(GeneratorError::WriteFailure { path, source }),
        };

        if let Err(source) = file.write_all(contents.as_bytes()).and_then(|_| file.sync_all()) {
            drop(file);
            remove_partial(&path);
            return Err(GeneratorError::WriteFailure { path, source });
        }

        Ok(CreateOutcome::Created(path))
    }
}

/// Exactly one normal path component: no separators, no `..`, no root.
pub fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == file_name
    )
}

fn remove_partial(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) if err.kind() == ErrorKind::NotFound => true,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "partial file left behind");
            false
        }
    }
}
