//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past the policy limit it is shifted to
//! `<file>.1`, the previous `<file>.1` becomes `<file>.2`, and so on. The
//! oldest backup beyond the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size limit and retention for a rotating file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file exceeds this many bytes.
    pub max_bytes: u64,
    /// Numbered backups kept next to the active file.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so constructing a writer for
/// a directory that does not exist yet is not an error.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_policy(file_path, RotationPolicy::default())
    }

    pub const fn with_policy(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open or write errors, or when the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            *writer = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    /// Shifts every backup up by one and moves the active file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.policy.max_backups).rev() {
            let from = backup_path(&self.file_path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, index + 1))?;
            }
        }
        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

/// `<file>.<index>`, e.g. `reelscout-otlp.json.2`.
fn backup_path(file_path: &Path, index: usize) -> PathBuf {
    let mut name = file_path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy() -> RotationPolicy {
        RotationPolicy {
            max_bytes: 16,
            max_backups: 2,
        }
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_the_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_policy(path.clone(), small_policy());

        writer.write_line("first line is long").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).unwrap(),
            "first line is long\n"
        );
    }

    #[test]
    fn keeps_only_the_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_policy(path.clone(), small_policy());

        for i in 0..5 {
            writer.write_line(&format!("line number {i} padded")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 4 padded\n");
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).unwrap(),
            "line number 3 padded\n"
        );
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).unwrap(),
            "line number 2 padded\n"
        );
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn default_policy_is_ten_megabytes_three_backups() {
        let policy = RotationPolicy::default();
        assert_eq!(policy.max_bytes, 10_485_760);
        assert_eq!(policy.max_backups, 3);
    }
}
