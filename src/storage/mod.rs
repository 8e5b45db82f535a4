//! Storage module
//!
//! Owns the server-local data directory and the append log inside it.
//! Appends are serialized through an async mutex so concurrent requests
//! can never interleave partial lines; reads are confined to the data
//! directory so a request can never name a file outside it.

use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Fixed logical name of the append log inside the data directory.
pub const APPEND_LOG_NAME: &str = "file.txt";

/// File storage rooted at the data directory.
pub struct Storage {
    root: PathBuf,
    append_lock: Mutex<()>,
}

impl Storage {
    /// Open storage rooted at `data_dir`, creating the directory if absent.
    pub fn open(data_dir: &str) -> io::Result<Self> {
        let root = PathBuf::from(data_dir);
        std::fs::create_dir_all(&root)?;

        Ok(Self {
            root,
            append_lock: Mutex::new(()),
        })
    }

    /// Append `text` plus a newline to the append log, creating it if absent.
    ///
    /// Holding the lock across open+write guarantees whole-line appends
    /// under concurrent requests.
    pub async fn append_line(&self, text: &str) -> io::Result<()> {
        let _guard = self.append_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(APPEND_LOG_NAME))
            .await?;

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    /// Read the named file from the data directory as UTF-8 text.
    ///
    /// Names that would escape the data directory are reported as not found
    /// rather than resolved, so `ErrorKind::NotFound` covers both a missing
    /// file and a rejected name.
    pub async fn read_file(&self, name: &str) -> io::Result<String> {
        let Some(path) = self.resolve(name) else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("invalid file name: '{name}'"),
            ));
        };

        tokio::fs::read_to_string(path).await
    }

    /// Resolve a user-supplied name against the data directory.
    ///
    /// Only a single normal path component is accepted: separators, `..`,
    /// absolute paths, and the empty string are all rejected.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let candidate = Path::new(name);
        let mut components = candidate.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(candidate)),
            _ => None,
        }
    }

    /// Path of the data directory (for startup logging).
    pub fn root(&self) -> &Path {
        &self.root
    }
}
