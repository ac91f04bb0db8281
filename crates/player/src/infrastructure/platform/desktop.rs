//! Native platform: preferences in a JSON file, links through the OS
//! URL handler.

use crate::ports::outbound::platform::{LinkOpener, PlatformError, StorageProvider};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

/// Key-value preferences kept in one JSON object file at:
/// - Linux: ~/.config/sheetz/storage.json
/// - macOS: ~/Library/Application Support/io.sheetz.sheetz/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\sheetz\sheetz\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    /// Mirror of the file contents
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider under the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "sheetz", "sheetz") {
            dirs.config_dir().join("storage.json")
        } else {
            // No home directory: use the working directory
            PathBuf::from("sheetz_storage.json")
        };
        Self::with_path(storage_path)
    }

    /// Create a storage provider backed by an explicit file
    ///
    /// Loads existing data from the file if it exists.
    pub fn with_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_store(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Write the whole cache back to the file.
    fn persist(&self) -> Result<(), PlatformError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create storage directory: {}", e);
                    PlatformError::storage(format!("create {}: {}", parent.display(), e))
                })?;
            }
        }

        let data = {
            let cache = self.cache.read().map_err(|e| {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                PlatformError::storage("storage lock poisoned")
            })?;
            serde_json::to_string_pretty(&*cache).map_err(|e| {
                tracing::error!("Failed to serialize storage data: {}", e);
                PlatformError::storage(e.to_string())
            })?
        };

        fs::write(&self.storage_path, data).map_err(|e| {
            tracing::error!("Failed to write storage file: {}", e);
            PlatformError::storage(format!("write {}: {}", self.storage_path.display(), e))
        })
    }
}

fn read_store(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist()
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
                Err(PlatformError::storage("storage lock poisoned"))
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist()
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
                Err(PlatformError::storage("storage lock poisoned"))
            }
        }
    }
}

/// Desktop link opener using the OS URL handler
#[derive(Clone, Default)]
pub struct DesktopLinkOpener;

impl DesktopLinkOpener {
    fn command(url: &str) -> Result<Command, PlatformError> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            Ok(cmd)
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            Ok(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            Ok(cmd)
        } else {
            Err(PlatformError::Unsupported("opening links"))
        }
    }
}

/// Start `cmd` and reap it on a background thread once it exits.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

impl LinkOpener for DesktopLinkOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        tracing::debug!(url, "Opening link");
        spawn_reaped(Self::command(url)?)
            .map(|_| ())
            .map_err(|e| PlatformError::link(url, e.to_string()))
    }
}

/// Platform with preferences under the per-user config directory
pub fn create_platform() -> Platform {
    Platform::new(DesktopStorageProvider::new(), DesktopLinkOpener)
}

/// Create platform services for desktop with storage at an explicit path
pub fn create_platform_with_storage(path: impl Into<PathBuf>) -> Platform {
    Platform::new(DesktopStorageProvider::with_path(path), DesktopLinkOpener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_persists_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let first = DesktopStorageProvider::with_path(&path);
        first.save("darkMode", "true").unwrap();
        assert!(path.exists());

        let second = DesktopStorageProvider::with_path(&path);
        assert_eq!(second.load("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::with_path(&path);
        storage.save("a", "1").unwrap();
        storage.remove("a").unwrap();

        let reopened = DesktopStorageProvider::with_path(&path);
        assert_eq!(reopened.load("a"), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = DesktopStorageProvider::with_path(&path);
        assert_eq!(storage.load("darkMode"), None);
    }

    #[test]
    fn unwritable_path_reports_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("storage.json");
        fs::create_dir(&path).unwrap();

        let storage = DesktopStorageProvider::with_path(&path);
        let err = storage.save("darkMode", "true").unwrap_err();
        assert!(matches!(err, PlatformError::Storage(_)));
        // The cache still holds the value for this run.
        assert_eq!(storage.load("darkMode").as_deref(), Some("true"));
    }

    #[cfg(unix)]
    #[test]
    fn launched_command_is_waited_on() {
        let reaper = spawn_reaped(Command::new("true")).unwrap();
        let status = reaper.join().expect("reaper thread").unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_program_fails_to_launch() {
        let err = spawn_reaped(Command::new("sheetz-no-such-opener")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
