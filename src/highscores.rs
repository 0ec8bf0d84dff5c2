//! High score persistence bridge
//!
//! The only thing that survives a session is one integer. The file store
//! keeps it as plain text; a missing or unreadable file silently defaults
//! to zero.

use std::fs;
use std::path::PathBuf;

/// Default high score file, next to the executable's working directory
pub const DEFAULT_PATH: &str = "score.txt";

/// External storage for the high score integer
pub trait HighScoreStore {
    /// Read the stored high score; absent backing yields 0
    fn load(&self) -> u32;
    /// Write the high score immediately
    fn save(&mut self, score: u32);
}

/// Plain-text file store: the file holds the integer and nothing else
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => {
                    log::info!("Loaded high score {}", score);
                    score
                }
                Err(_) => {
                    log::warn!("Unparsable high score file {:?}, using 0", self.path);
                    0
                }
            },
            // Missing file is the normal first-run case
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(err) = fs::write(&self.path, score.to_string()) {
            log::error!("Failed to save high score to {:?}: {}", self.path, err);
        } else {
            log::info!("High score saved: {}", score);
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        self.value = Some(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);
        store.save(135);
        assert_eq!(store.load(), 135);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join("arena_dodge_score_roundtrip.txt");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::new(&path);
        assert_eq!(store.load(), 0, "missing file defaults to 0");

        store.save(470);
        assert_eq!(store.load(), 470);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_garbage_file_defaults_to_zero() {
        let path = std::env::temp_dir().join("arena_dodge_score_garbage.txt");
        fs::write(&path, "not a number").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load(), 0);

        let _ = fs::remove_file(&path);
    }
}
