use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use avleia_core::types::ConfirmationRecord;
use avleia_engine::traits::ConfirmationStore;
use serde_json::{Map, Value};

/// Fixed key the display screen reads at its own startup.
pub const CONFIRMATION_SLOT_KEY: &str = "bookingConfirmation";

/// The shared persisted slot as one JSON object file, keyed by
/// `bookingConfirmation`. Overwritten on every trigger, never deleted here.
///
/// Known limitation: the slot is device-local with no locking, so
/// concurrent sessions on one device race on it and the last writer wins.
/// That matches the single-user assumption and is deliberately not fixed.
#[derive(Debug, Clone)]
pub struct FileConfirmationStore {
    path: PathBuf,
}

impl FileConfirmationStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Map<String, Value> {
        // A missing or unreadable file starts a fresh map; a corrupted one
        // is discarded rather than propagated.
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    fn try_write(&self, record: &ConfirmationRecord) -> anyhow::Result<()> {
        let mut map = self.load_map();
        map.insert(
            CONFIRMATION_SLOT_KEY.to_string(),
            serde_json::to_value(record).context("encode confirmation record")?,
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create storage directory: {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&Value::Object(map))?)
            .with_context(|| format!("write storage temp: {}", tmp.display()))?;
        crate::files::replace_file(&tmp, &self.path)
            .with_context(|| format!("replace storage: {}", self.path.display()))?;
        Ok(())
    }
}

impl ConfirmationStore for FileConfirmationStore {
    fn write(&self, record: &ConfirmationRecord) {
        if let Err(e) = self.try_write(record) {
            log::warn!("confirmation write dropped: {e:#}");
        }
    }

    fn read(&self) -> Option<ConfirmationRecord> {
        let value = self.load_map().remove(CONFIRMATION_SLOT_KEY)?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("confirmation slot malformed, using defaults: {e}");
                None
            }
        }
    }
}
