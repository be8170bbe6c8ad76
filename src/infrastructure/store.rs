//! JSON file entry store

use crate::domain::MoodEntry;
use crate::error::{GooddayError, Result};
use crate::infrastructure::Config;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative path of the mood log inside a goodday directory
const DATA_FILE: &str = ".goodday/mood_data.json";

/// Result of a full store scan. Records that fail to parse are skipped
/// and counted rather than aborting the read, so a single corrupt
/// record cannot take down entire-history queries.
#[derive(Debug, Clone, Default)]
pub struct StoreScan {
    /// Entries in storage (append) order
    pub entries: Vec<MoodEntry>,
    /// Number of records skipped as malformed
    pub skipped: usize,
}

/// Abstract append-only store for mood entries
pub trait EntryStore {
    /// Append one entry; visible to subsequent scans immediately
    fn append(&self, entry: &MoodEntry) -> Result<()>;

    /// Read every stored entry in storage order
    fn scan(&self) -> Result<StoreScan>;
}

/// File system implementation backed by a single JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    pub root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        JsonFileStore { root }
    }

    /// Discover the journal root, checking GOODDAY_ROOT first and then
    /// walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("GOODDAY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_goodday_dir(&path) {
                return Ok(JsonFileStore::new(path));
            } else {
                return Err(GooddayError::Config(format!(
                    "GOODDAY_ROOT is set to '{}' but no .goodday directory found. \
                    Run 'goodday init' in that directory or unset GOODDAY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_goodday_dir(&current) {
                return Ok(JsonFileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(GooddayError::NotMoodJournal(start.to_path_buf()));
                }
            }
        }
    }

    fn has_goodday_dir(path: &Path) -> bool {
        path.join(".goodday").is_dir()
    }

    /// Check if a .goodday directory exists at the root
    pub fn is_initialized(&self) -> bool {
        Self::has_goodday_dir(&self.root)
    }

    /// Create the .goodday directory, default config and empty log
    pub fn initialize(&self) -> Result<()> {
        let goodday_dir = self.root.join(".goodday");

        if goodday_dir.exists() {
            return Err(GooddayError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&goodday_dir)?;
        Config::default().save_to_dir(&self.root)?;
        fs::write(self.data_path(), "[]\n")?;
        Ok(())
    }

    /// Load configuration from .goodday/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .goodday/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    /// Read the raw record array. A missing file reads as empty; a file
    /// whose top level is not a JSON array is a persistence failure.
    fn read_records(&self) -> Result<Vec<Value>> {
        let path = self.data_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            GooddayError::Persistence(format!("cannot read {}: {}", path.display(), e))
        })?;

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            GooddayError::Persistence(format!("{} is not a JSON array: {}", path.display(), e))
        })
    }

    /// Rewrite the record array using a temp file + rename so a failed
    /// write cannot leave a half-written log behind.
    fn write_records(&self, records: &[Value]) -> Result<()> {
        let path = self.data_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(records).map_err(|e| {
            GooddayError::Persistence(format!("failed to serialize mood log: {}", e))
        })?;

        let tmp_name = format!("mood_data.json.goodday-tmp-{}", std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl EntryStore for JsonFileStore {
    fn append(&self, entry: &MoodEntry) -> Result<()> {
        let mut records = self.read_records()?;

        let record = serde_json::to_value(entry).map_err(|e| {
            GooddayError::Persistence(format!("failed to serialize entry: {}", e))
        })?;
        records.push(record);

        self.write_records(&records)
    }

    fn scan(&self) -> Result<StoreScan> {
        let records = self.read_records()?;

        let mut scan = StoreScan::default();
        for record in records {
            match serde_json::from_value::<MoodEntry>(record) {
                Ok(entry) => scan.entries.push(entry),
                Err(_) => scan.skipped += 1,
            }
        }

        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CaptureMode;
    use chrono::{TimeZone, Utc};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn sample_entry(hour: u32, mood_value: i32, notes: &str) -> MoodEntry {
        MoodEntry::new(
            Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap(),
            mood_value,
            notes.to_string(),
            CaptureMode::Points,
        )
    }

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();

        assert!(store.is_initialized());
        assert!(temp.path().join(".goodday/config.toml").exists());
        assert!(temp.path().join(".goodday/mood_data.json").exists());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_scan_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let scan = store.scan().unwrap();
        assert!(scan.entries.is_empty());
        assert_eq!(scan.skipped, 0);
    }

    #[test]
    fn test_append_then_scan_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let entry = sample_entry(9, 7, "walk");
        store.append(&entry).unwrap();

        let scan = store.scan().unwrap();
        assert_eq!(scan.entries.len(), 1);
        assert_eq!(scan.entries.last().unwrap(), &entry);
        assert_eq!(scan.skipped, 0);
    }

    #[test]
    fn test_append_preserves_storage_order() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        // Appended out of timestamp order; scan returns append order
        store.append(&sample_entry(14, -6, "argument")).unwrap();
        store.append(&sample_entry(9, 7, "walk")).unwrap();

        let scan = store.scan().unwrap();
        let notes: Vec<&str> = scan.entries.iter().map(|e| e.notes.as_str()).collect();
        assert_eq!(notes, vec!["argument", "walk"]);
    }

    #[test]
    fn test_scan_skips_malformed_records() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(
            temp.path().join(".goodday/mood_data.json"),
            r#"[
                {"timestamp": "2025-06-02T09:00:00Z", "moodValue": 7, "notes": "walk", "mode": "points"},
                {"timestamp": "2025-06-02T14:00:00Z", "moodValue": "not a number", "notes": "bad", "mode": "points"},
                {"timestamp": "2025-06-02T20:00:00Z", "moodValue": 2, "notes": "", "mode": "realtime"}
            ]"#,
        )
        .unwrap();

        let scan = store.scan().unwrap();
        assert_eq!(scan.entries.len(), 2);
        assert_eq!(scan.skipped, 1);
        assert_eq!(scan.entries[0].mood_value, 7);
        assert_eq!(scan.entries[1].mood_value, 2);
    }

    #[test]
    fn test_scan_corrupt_top_level_is_persistence_error() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(temp.path().join(".goodday/mood_data.json"), "{ not json").unwrap();

        match store.scan().unwrap_err() {
            GooddayError::Persistence(msg) => assert!(msg.contains("JSON array")),
            e => panic!("Expected Persistence error, got {:?}", e),
        }
    }

    #[test]
    fn test_scan_missing_file_reads_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        let scan = store.scan().unwrap();
        assert!(scan.entries.is_empty());
    }

    #[test]
    fn test_append_to_corrupt_store_fails_without_write() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(temp.path().join(".goodday/mood_data.json"), "{ not json").unwrap();

        let result = store.append(&sample_entry(9, 1, ""));
        assert!(result.is_err());

        // Corrupt contents untouched
        let contents = fs::read_to_string(temp.path().join(".goodday/mood_data.json")).unwrap();
        assert_eq!(contents, "{ not json");
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".goodday")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = JsonFileStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_goodday() {
        let temp = TempDir::new().unwrap();

        match JsonFileStore::discover_from(temp.path()).unwrap_err() {
            GooddayError::NotMoodJournal(_) => {}
            e => panic!("Expected NotMoodJournal error, got {:?}", e),
        }
    }

    #[test]
    fn test_discover_with_goodday_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("GOODDAY_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".goodday")).unwrap();

        std::env::set_var("GOODDAY_ROOT", temp.path());

        let store = JsonFileStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_goodday_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("GOODDAY_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("GOODDAY_ROOT", temp.path());

        match JsonFileStore::discover().unwrap_err() {
            GooddayError::Config(msg) => assert!(msg.contains("no .goodday directory")),
            e => panic!("Expected Config error, got {:?}", e),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let mut config = store.load_config().unwrap();
        config.wake = "06:30".to_string();
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.wake, "06:30");
    }
}
