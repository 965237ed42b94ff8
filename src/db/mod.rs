//! Persistence module split across logical submodules. Connection management
//! lives in `connection`; the per-table query helpers hang off [`MusicStore`]
//! from their own files.

mod artists;
mod connection;
mod error;
mod songs;

pub use connection::MusicStore;
pub use error::StoreError;
