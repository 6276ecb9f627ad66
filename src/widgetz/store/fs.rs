use super::{apply_save, DataStore, SaveCondition};
use crate::error::{Result, WidgetzError};
use crate::model::{Lookup, Widget, WidgetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    next_id: WidgetId,
    widgets: BTreeMap<WidgetId, Widget>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            next_id: 1,
            widgets: BTreeMap::new(),
        }
    }
}

/// Stores every widget in a single JSON file.
///
/// The mutex serializes load-modify-write cycles inside this process. Two
/// processes pointed at the same file are not coordinated.
pub struct FileStore {
    data_file: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WidgetzError::Io)?;
            }
        }
        Ok(())
    }

    fn load(&self) -> Result<Document> {
        if !self.data_file.exists() {
            return Ok(Document::default());
        }
        let content = fs::read_to_string(&self.data_file).map_err(WidgetzError::Io)?;
        let doc: Document = serde_json::from_str(&content).map_err(WidgetzError::Serialization)?;
        Ok(doc)
    }

    fn persist(&self, doc: &Document) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(doc).map_err(WidgetzError::Serialization)?;

        // Write to a sibling temp file, then rename over the target
        let file_name = self
            .data_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("widgets.json");
        let tmp_file = self
            .data_file
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(WidgetzError::Io)?;
        fs::rename(&tmp_file, &self.data_file).map_err(WidgetzError::Io)?;
        Ok(())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| WidgetzError::Store("File store lock poisoned".to_string()))
    }
}

impl DataStore for FileStore {
    fn get_widget(&self, id: WidgetId) -> Result<Lookup> {
        let _guard = self.guard()?;
        let mut doc = self.load()?;
        Ok(match doc.widgets.remove(&id) {
            Some(widget) => Lookup::Found(widget),
            None => Lookup::Absent,
        })
    }

    fn list_widgets(&self) -> Result<Vec<Widget>> {
        let _guard = self.guard()?;
        let doc = self.load()?;
        Ok(doc.widgets.into_values().collect())
    }

    fn save_widget(&self, widget: Widget, condition: SaveCondition) -> Result<Widget> {
        let _guard = self.guard()?;
        let mut doc = self.load()?;
        let Document { widgets, next_id } = &mut doc;
        let saved = apply_save(widgets, next_id, widget, condition)?;
        self.persist(&doc)?;
        Ok(saved)
    }

    fn delete_widget(&self, id: WidgetId) -> Result<()> {
        let _guard = self.guard()?;
        let mut doc = self.load()?;
        if doc.widgets.remove(&id).is_some() {
            self.persist(&doc)?;
        }
        Ok(())
    }
}
