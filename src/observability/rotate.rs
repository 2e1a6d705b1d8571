//! Rotating file writer for trace output.
//!
//! Size-based rotation keeps disk usage bounded: once the current file grows
//! past the threshold it is renamed with a timestamp suffix and a fresh file
//! takes its place, with only a fixed number of backups retained.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotation threshold for the current file (8 MB).
const MAX_LOG_BYTES: u64 = 8 * 1024 * 1024;

/// Number of rotated backups to keep.
const KEPT_BACKUPS: usize = 2;

/// Thread-safe writer with size-based rotation.
///
/// The file handle opens lazily on the first write, so construction cannot
/// fail and the writer stays inert when tracing never emits anything.
pub struct RotatingWriter {
    path: PathBuf,
    handle: Mutex<Option<fs::File>>,
}

impl RotatingWriter {
    /// Creates a writer for the given path without opening the file.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first when the file is over the threshold.
    ///
    /// The line is flushed immediately so traces survive abrupt exits.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or when the
    /// internal lock was poisoned by a panicking thread.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self.handle.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("lock poisoned: {e}"))
        })?;

        if self.over_threshold() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no file handle"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Returns whether the current file exceeds the rotation threshold.
    fn over_threshold(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > MAX_LOG_BYTES)
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    ///
    /// Backups are named `<name>.<unix_timestamp>` next to the original.
    fn rotate(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        if self.path.exists() {
            let mut backup = self.path.clone().into_os_string();
            backup.push(format!(".{timestamp}"));
            fs::rename(&self.path, PathBuf::from(backup))?;
        }

        self.prune_backups()
    }

    /// Deletes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion failures are ignored so pruning keeps going even
    /// when some files resist removal.
    fn prune_backups(&self) -> std::io::Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "no parent directory")
        })?;

        let current_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| {
                        n.strip_prefix(current_name)
                            .is_some_and(|suffix| suffix.starts_with('.'))
                    })
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for stale in backups.iter().skip(KEPT_BACKUPS) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
