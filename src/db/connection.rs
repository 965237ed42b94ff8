use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::BaseDirs;
use log::debug;
use rusqlite::Connection;
use tokio::sync::OnceCell;
use tokio::task;

use super::StoreError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".tunedeck";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "music.sqlite";

/// Process-wide store handle, constructed by whichever task gets there first.
static STORE: OnceCell<MusicStore> = OnceCell::const_new();

/// Handle to the SQLite-backed music store. Clones share one connection
/// guarded by a mutex, and every query runs on the blocking thread pool so
/// async callers suspend instead of stalling the runtime.
#[derive(Clone)]
pub struct MusicStore {
    conn: Arc<Mutex<Connection>>,
}

impl MusicStore {
    /// Get the shared store, opening the on-disk database on first call.
    /// Every later call returns the same instance, including calls racing the
    /// first one.
    pub async fn open() -> Result<&'static MusicStore, StoreError> {
        STORE
            .get_or_try_init(|| async {
                let path = default_db_path()?;
                MusicStore::open_at(path).await
            })
            .await
    }

    /// Open a store at an explicit path, bypassing the process-wide handle.
    /// Tests use this to point at throwaway files.
    pub async fn open_at(path: PathBuf) -> Result<MusicStore, StoreError> {
        let conn = task::spawn_blocking(move || open_connection(&path)).await??;
        Ok(MusicStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the connection on the blocking pool. All query
    /// helpers funnel through here.
    pub(crate) async fn call<T, F>(&self, job: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| StoreError::Poisoned)?;
            job(&conn)
        })
        .await?
    }
}

/// Open the database file, apply pragmas, and run lazy migrations.
fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    ensure_schema(&conn)?;

    debug!("opened music database at {}", path.display());
    Ok(conn)
}

/// Create both tables on first run. Column names are part of the on-disk
/// format shared with earlier releases, so the mixed naming style stays.
fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS artists (
            id TEXT PRIMARY KEY,
            name TEXT,
            monthlyListeners INTEGER,
            album_count INTEGER
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            artist_id TEXT,
            genre TEXT,
            duration INTEGER,
            isFavorite INTEGER
        )",
        [],
    )?;

    Ok(())
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_db_path() -> Result<PathBuf, StoreError> {
    let base_dirs = BaseDirs::new().ok_or(StoreError::NoHomeDir)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
