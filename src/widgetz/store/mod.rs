//! # Storage Layer
//!
//! This module defines the storage abstraction for widgetz. The [`DataStore`] trait
//! allows the service to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other backends** (database, key-value service) without changing core logic
//! - Keep the update protocol **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file storage
//!   - All widgets plus the id counter in one document
//!   - Writes go to a temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Identity and Versions
//!
//! The store owns identity: saving a widget without an `id` assigns the next
//! one from a counter that starts at 1 and never reuses ids. It does **not**
//! compute versions; callers hand it the version to persist.
//!
//! ## Conditional Writes
//!
//! `save_widget` takes a [`SaveCondition`]. With `VersionIs(v)` the store
//! checks the currently stored version and writes under the same lock, so a
//! writer that read version `v` cannot silently overwrite a competing write.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! widgets.json
//! {
//!   "next_id": 3,
//!   "widgets": { "1": { "id": 1, "name": "...", "description": "...", "version": 4 }, ... }
//! }
//! ```

use crate::error::{Result, WidgetzError};
use crate::model::{Lookup, Version, Widget, WidgetId};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Precondition for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveCondition {
    /// Insert or replace regardless of what is stored.
    Unconditional,
    /// Replace only if the stored record currently has this version.
    VersionIs(Version),
}

/// Abstract interface for widget storage.
///
/// Each method is atomic on its own; nothing is transactional across calls.
pub trait DataStore: Send + Sync {
    /// Get a widget by ID
    fn get_widget(&self, id: WidgetId) -> Result<Lookup>;

    /// List all widgets, ordered by ID
    fn list_widgets(&self) -> Result<Vec<Widget>>;

    /// Insert or replace a widget, assigning an ID when it has none.
    /// Returns the record as stored.
    fn save_widget(&self, widget: Widget, condition: SaveCondition) -> Result<Widget>;

    /// Delete a widget. Deleting an unknown ID is not an error.
    fn delete_widget(&self, id: WidgetId) -> Result<()>;
}

/// Shared insert-or-replace logic for map-backed stores.
///
/// `next_id` is the id counter; it is advanced when a new id is handed out.
pub(crate) fn apply_save(
    widgets: &mut BTreeMap<WidgetId, Widget>,
    next_id: &mut WidgetId,
    mut widget: Widget,
    condition: SaveCondition,
) -> Result<Widget> {
    if let SaveCondition::VersionIs(expected) = condition {
        let id = widget.id.ok_or_else(|| {
            WidgetzError::Store("Conditional save requires an existing id".to_string())
        })?;
        let stored = widgets.get(&id).ok_or(WidgetzError::NotFound(id))?;
        let actual = stored.version.unwrap_or(0);
        if actual != expected {
            return Err(WidgetzError::Conflict {
                expected: expected.to_string(),
                actual,
            });
        }
    }

    let id = match widget.id {
        Some(id) => {
            if id >= *next_id {
                *next_id = id + 1;
            }
            id
        }
        None => {
            let id = *next_id;
            *next_id += 1;
            id
        }
    };
    widget.id = Some(id);
    widgets.insert(id, widget.clone());
    Ok(widget)
}
