//! Core library surface for the tunedeck TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the SQLite-backed store, the seed catalog, and the in-memory library the
//! UI reads from.
pub mod db;
pub mod library;
pub mod models;
pub mod seed;
pub mod ui;

/// The persistence layer: the shared store handle and its error type.
pub use db::{MusicStore, StoreError};

/// The in-memory list holder bridging the store to the UI.
pub use library::Library;

/// The two primary domain types that other layers manipulate.
pub use models::{Artist, Song};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
