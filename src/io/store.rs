use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::model::TodoList;

/// File name of the todo store, kept next to the executable.
pub const STORE_FILE_NAME: &str = "doots";

/// Error type for store I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not locate the doots executable: {0}")]
    ExePath(#[source] io::Error),
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Path of the store file: `doots` in the directory holding the running binary.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let exe = std::env::current_exe().map_err(StoreError::ExePath)?;
    let dir = exe.parent().unwrap_or(Path::new("."));
    Ok(dir.join(STORE_FILE_NAME))
}

/// Load the todo list from `path`. A missing file is an empty list.
pub fn load_todos(path: &Path) -> Result<TodoList, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no store at {}, starting empty", path.display());
            return Ok(TodoList::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let list: TodoList = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} todos from {}", list.len(), path.display());
    Ok(list)
}

/// Overwrite the store at `path` with the full list.
pub fn save_todos(path: &Path, list: &TodoList) -> Result<(), StoreError> {
    let content = serde_json::to_vec(list)?;
    atomic_write(path, &content).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("saved {} todos to {}", list.len(), path.display());
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
