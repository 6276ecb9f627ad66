//! # Widgetz Architecture
//!
//! Widgetz is a small CRUD service for "widgets" whose only interesting rule is
//! **optimistic concurrency**: every widget carries a version, clients echo it
//! back in `If-Match`, and a write with a stale version is refused.
//!
//! Like any widgetz front end, the HTTP server is a thin client of the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Routes, extractors, status codes, ETag/Location headers  │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Wraps raw If-Match values in the right match mode        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + versioning.rs              │
//! │  - Read / list / create / update / delete                   │
//! │  - Version checks and next-version computation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait with conditional save           │
//! │  - FileStore (JSON file), InMemoryStore                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Update Protocol
//!
//! 1. Look the widget up. Unknown id: `NotFound`, and the token is never examined.
//! 2. Check `If-Match` against the stored version. Mismatch: `Conflict`, nothing written.
//! 3. Save with version `stored + 1`, conditioned on the store still holding `stored`.
//!
//! Step 3 is a compare-and-swap, so two clients racing with the same token
//! cannot both win.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per operation, plus location building
//! - [`versioning`]: Version policy and the ETag token codec
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Widget`, `WidgetDraft`, `Lookup`
//! - [`config`]: Configuration file handling
//! - [`server`]: axum router and handlers
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
pub mod versioning;
