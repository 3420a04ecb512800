//! JSON document I/O for manifests
//!
//! Manifests are read whole, edited as a `serde_json::Value`, and written
//! back whole. Key order is preserved (`preserve_order`) and output uses
//! 2-space indentation with a trailing newline. Writes go through a temp
//! file and a rename so a failed write never truncates the original.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{} not found", .0.display())]
    MissingRequiredFile(PathBuf),

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {}", .0.display())]
    NotAnObject(PathBuf),

    #[error("Invalid field '{field}' in {}: {reason}", path.display())]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        reason: &'static str,
    },

    #[error("Failed to serialize {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads and parses a JSON document
pub fn read(path: &Path) -> Result<Value, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::MissingRequiredFile(path.to_path_buf())
        } else {
            ManifestError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON document whose root must be an object
pub fn read_object(path: &Path) -> Result<Map<String, Value>, ManifestError> {
    match read(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject(path.to_path_buf())),
    }
}

/// Renders a document the way manifests are stored on disk
pub fn render(path: &Path, value: &Value) -> Result<String, ManifestError> {
    let mut content = serde_json::to_string_pretty(value).map_err(|source| {
        ManifestError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    content.push('\n');
    Ok(content)
}

/// Serializes and writes a document, replacing the file atomically
///
/// A symlinked manifest is written through to its target, and the target
/// keeps its permissions. A read-only target is refused.
pub fn write(path: &Path, value: &Value) -> Result<(), ManifestError> {
    let content = render(path, value)?;
    let write_err = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(write_err(e)),
    };

    if permissions.as_ref().is_some_and(|p| p.readonly()) {
        return Err(write_err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )));
    }

    let temp_path = temp_path_for(&target);

    let written = replace_file(&temp_path, &target, &content, permissions);

    if let Err(source) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }

    Ok(())
}

fn replace_file(
    temp_path: &Path,
    target: &Path,
    content: &str,
    permissions: Option<fs::Permissions>,
) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;

    {
        let mut writer = BufWriter::new(&file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
    }

    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }

    fs::rename(temp_path, target)
}

/// Follows a symlink so the rename replaces the real file, not the link
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
