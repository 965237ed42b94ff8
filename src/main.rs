//! Binary entry point that glues the SQLite-backed music store to the TUI.
//! The bootstrapping pipeline: bring up the database, seed it if this is the
//! first run, hydrate the in-memory library, and drive the Ratatui event loop
//! until the user exits.
use tokio::task;

use tunedeck::{run_app, seed, App, Library, MusicStore};

/// Initialize persistence, seed an empty store, and launch the event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// a missing home directory) to the terminal instead of crashing silently.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let store = MusicStore::open().await?;
    seed::apply_if_empty(store).await?;

    let library = Library::new(store.clone());
    let mut app = App::new(library);
    task::block_in_place(|| run_app(&mut app))
}
