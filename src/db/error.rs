use thiserror::Error;

/// Failures surfaced by the music store. Query helpers translate raw SQLite
/// errors into these variants so callers can match on the ones they care
/// about instead of scraping message strings.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("artist id {0:?} already exists")]
    DuplicateArtist(String),

    #[error("could not locate home directory")]
    NoHomeDir,

    #[error("database lock poisoned")]
    Poisoned,

    #[error("database task failed: {0}")]
    Background(#[from] tokio::task::JoinError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
