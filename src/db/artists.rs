use log::debug;
use rusqlite::{params, Connection, Error as SqlError, ErrorCode};

use crate::models::Artist;

use super::{MusicStore, StoreError};

impl MusicStore {
    /// Fetch every artist in natural storage order.
    pub async fn all_artists(&self) -> Result<Vec<Artist>, StoreError> {
        self.call(fetch_artists).await
    }

    /// Insert a new artist row. Artist ids are caller-assigned, so reusing an
    /// existing id is rejected with [`StoreError::DuplicateArtist`] instead of
    /// overwriting the row.
    pub async fn insert_artist(&self, artist: Artist) -> Result<(), StoreError> {
        self.call(move |conn| insert_artist(conn, &artist)).await
    }
}

fn fetch_artists(conn: &Connection) -> Result<Vec<Artist>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, monthlyListeners, album_count FROM artists")?;

    let artists = stmt
        .query_map([], |row| {
            Ok(Artist {
                id: row.get(0)?,
                name: row.get(1)?,
                monthly_listeners: row.get(2)?,
                album_count: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(artists)
}

fn insert_artist(conn: &Connection, artist: &Artist) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO artists (id, name, monthlyListeners, album_count) VALUES (?1, ?2, ?3, ?4)",
        params![
            artist.id,
            artist.name,
            artist.monthly_listeners,
            artist.album_count
        ],
    )
    .map_err(|err| map_duplicate_artist(err, &artist.id))?;

    debug!("inserted artist {}", artist.id);
    Ok(())
}

/// Coerce SQLite constraint errors into [`StoreError::DuplicateArtist`]. The
/// only constraint on the artists table is its primary key.
fn map_duplicate_artist(err: SqlError, id: &str) -> StoreError {
    if matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
        StoreError::DuplicateArtist(id.to_string())
    } else {
        err.into()
    }
}
