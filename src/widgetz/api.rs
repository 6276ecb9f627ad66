//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all widget operations, regardless of the transport in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., wrapping raw `If-Match` values in an [`IfMatch`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `versioning.rs`
//! - **HTTP concerns**: No status codes, headers or JSON; see `server/`
//!
//! ## Generic Over DataStore
//!
//! `WidgetzApi<S: DataStore>` is generic over the storage backend:
//! - Persistent: `WidgetzApi<FileStore>`
//! - Testing / ephemeral: `WidgetzApi<InMemoryStore>`
//!
//! The store is handed in at construction; there is no global registry. All
//! methods take `&self`, so one facade can be shared across request tasks.

use crate::commands;
use crate::error::Result;
use crate::model::{WidgetDraft, WidgetId};
use crate::store::DataStore;
use crate::versioning::IfMatch;

/// The main API facade for widget operations.
pub struct WidgetzApi<S: DataStore> {
    store: S,
    paths: commands::WidgetPaths,
}

impl<S: DataStore> WidgetzApi<S> {
    pub fn new(store: S, paths: commands::WidgetPaths) -> Self {
        Self { store, paths }
    }

    pub fn get_widget(&self, id: WidgetId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, &self.paths, id)
    }

    pub fn list_widgets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.paths)
    }

    pub fn create_widget(&self, draft: WidgetDraft) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, &self.paths, draft)
    }

    /// Canonical update: the token is decoded and compared numerically.
    pub fn update_widget(
        &self,
        id: WidgetId,
        draft: WidgetDraft,
        if_match: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(
            &self.store,
            &self.paths,
            id,
            draft,
            &IfMatch::strict(if_match),
        )
    }

    /// Compatibility update: the raw token is compared to the bare decimal
    /// version, ignoring case.
    pub fn update_widget_compat(
        &self,
        id: WidgetId,
        draft: WidgetDraft,
        if_match: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(
            &self.store,
            &self.paths,
            id,
            draft,
            &IfMatch::loose(if_match),
        )
    }

    pub fn delete_widget(&self, id: WidgetId) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn paths(&self) -> &commands::WidgetPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{Body, CmdMessage, CmdResult, MessageLevel, Outcome, WidgetPaths};
