use super::{apply_save, DataStore, SaveCondition};
use crate::error::{Result, WidgetzError};
use crate::model::{Lookup, Widget, WidgetId};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    widgets: BTreeMap<WidgetId, Widget>,
    next_id: WidgetId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                widgets: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.widgets.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> WidgetzError {
    WidgetzError::Store("In-memory store lock poisoned".to_string())
}

impl DataStore for InMemoryStore {
    fn get_widget(&self, id: WidgetId) -> Result<Lookup> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(match inner.widgets.get(&id) {
            Some(widget) => Lookup::Found(widget.clone()),
            None => Lookup::Absent,
        })
    }

    fn list_widgets(&self) -> Result<Vec<Widget>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.widgets.values().cloned().collect())
    }

    fn save_widget(&self, widget: Widget, condition: SaveCondition) -> Result<Widget> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let Inner { widgets, next_id } = &mut *inner;
        apply_save(widgets, next_id, widget, condition)
    }

    fn delete_widget(&self, id: WidgetId) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.widgets.remove(&id);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Version;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_widgets(self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Widget {}", i + 1);
                let description = format!("Description {}", i + 1);
                self.save(Widget::new(name, description), 1);
            }
            self
        }

        /// Stores a widget as if it had already been through `version` saves.
        pub fn with_versioned_widget(self, name: &str, version: Version) -> Self {
            self.save(Widget::new(name, "Some description"), version);
            self
        }

        fn save(&self, mut widget: Widget, version: Version) {
            widget.version = Some(version);
            self.store
                .save_widget(widget, SaveCondition::Unconditional)
                .unwrap();
        }
    }
}
