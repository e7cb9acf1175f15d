//! Cart persistence slot
//!
//! The cart lives in exactly one durable slot: serialized wholesale on every
//! mutation, read back once at session start, no schema check or migration.
//! Cross-session concurrent mutation is undefined - last flush wins.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::cart::CartLine;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Single durable storage slot for the serialized cart
pub trait CartSlot: Send {
    /// Read the slot once; `None` when nothing was ever flushed
    fn load(&self) -> Result<Option<Vec<CartLine>>, SlotError>;

    /// Overwrite the slot with the full cart state
    fn store(&self, lines: &[CartLine]) -> Result<(), SlotError>;
}

/// File-backed slot: one JSON file, overwritten on every flush
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional slot location inside a session data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("cart.json"))
    }
}

impl CartSlot for FileSlot {
    fn load(&self) -> Result<Option<Vec<CartLine>>, SlotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn store(&self, lines: &[CartLine]) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(lines)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral sessions
///
/// Clones share the same underlying slot, so a test can hand one clone to the
/// engine and inspect flushes through the other.
#[derive(Clone, Default)]
pub struct MemorySlot {
    data: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartSlot for MemorySlot {
    fn load(&self) -> Result<Option<Vec<CartLine>>, SlotError> {
        match self.data.lock().unwrap().as_deref() {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }

    fn store(&self, lines: &[CartLine]) -> Result<(), SlotError> {
        let content = serde_json::to_string(lines)?;
        *self.data.lock().unwrap() = Some(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::ProductDraft;

    fn sample_lines() -> Vec<CartLine> {
        let product = ProductDraft {
            name: "Country Eggs".into(),
            category: "Eggs".into(),
            subcategory: String::new(),
            price: Decimal::from(120),
            unit: "dozen".into(),
            description: String::new(),
            image: String::new(),
            stock: 50,
        }
        .into_product("product:1-abc".into(), "2025-01-01T00:00:00Z".into());
        vec![CartLine {
            product,
            quantity: 2,
        }]
    }

    #[test]
    fn test_file_slot_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        slot.store(&sample_lines()).unwrap();

        let loaded = slot.load().unwrap().unwrap();
        assert_eq!(loaded, sample_lines());
    }

    #[test]
    fn test_file_slot_store_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        slot.store(&sample_lines()).unwrap();
        slot.store(&[]).unwrap();

        assert_eq!(slot.load().unwrap().unwrap(), vec![]);
    }

    #[test]
    fn test_file_slot_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("cart.json"));

        slot.store(&sample_lines()).unwrap();
        assert!(slot.load().unwrap().is_some());
    }

    #[test]
    fn test_memory_slot_clones_share_state() {
        let slot = MemorySlot::new();
        let observer = slot.clone();

        slot.store(&sample_lines()).unwrap();
        assert_eq!(observer.load().unwrap().unwrap().len(), 1);
    }
}

