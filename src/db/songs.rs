use log::debug;
use rusqlite::{params, Connection};

use crate::models::Song;

use super::{MusicStore, StoreError};

impl MusicStore {
    /// Fetch all songs, favorites first and alphabetical within each group.
    /// The query doubles as the single source of truth for how the UI orders
    /// songs.
    pub async fn all_songs(&self) -> Result<Vec<Song>, StoreError> {
        self.call(fetch_songs).await
    }

    /// Insert a new song and echo the hydrated struct back. The store assigns
    /// the id; whatever the caller put in `song.id` is ignored.
    pub async fn insert_song(&self, song: Song) -> Result<Song, StoreError> {
        self.call(move |conn| insert_song(conn, song)).await
    }

    /// Set the favorite flag on one song. Asking about an id that does not
    /// exist updates nothing and is not an error.
    pub async fn set_favorite(&self, song_id: i64, is_favorite: bool) -> Result<(), StoreError> {
        self.call(move |conn| set_favorite(conn, song_id, is_favorite))
            .await
    }

    /// Replace every column of an existing song row by primary key. Nothing in
    /// the application calls this today, but it stays part of the store's
    /// surface.
    pub async fn update_song(&self, song: Song) -> Result<(), StoreError> {
        self.call(move |conn| update_song(conn, &song)).await
    }
}

fn fetch_songs(conn: &Connection) -> Result<Vec<Song>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, artist_id, genre, duration, isFavorite
         FROM songs
         ORDER BY isFavorite DESC, name ASC",
    )?;

    let songs = stmt
        .query_map([], |row| {
            Ok(Song {
                id: row.get(0)?,
                name: row.get(1)?,
                artist_id: row.get(2)?,
                genre: row.get(3)?,
                duration: row.get(4)?,
                is_favorite: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(songs)
}

fn insert_song(conn: &Connection, song: Song) -> Result<Song, StoreError> {
    conn.execute(
        "INSERT INTO songs (name, artist_id, genre, duration, isFavorite)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            song.name,
            song.artist_id,
            song.genre,
            song.duration,
            song.is_favorite
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!("inserted song {id} ({})", song.name);
    Ok(Song { id, ..song })
}

fn set_favorite(conn: &Connection, song_id: i64, is_favorite: bool) -> Result<(), StoreError> {
    let updated = conn.execute(
        "UPDATE songs SET isFavorite = ?1 WHERE id = ?2",
        params![is_favorite, song_id],
    )?;

    if updated == 0 {
        debug!("set_favorite matched no song for id {song_id}");
    }
    Ok(())
}

fn update_song(conn: &Connection, song: &Song) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE songs
         SET name = ?1, artist_id = ?2, genre = ?3, duration = ?4, isFavorite = ?5
         WHERE id = ?6",
        params![
            song.name,
            song.artist_id,
            song.genre,
            song.duration,
            song.is_favorite,
            song.id
        ],
    )?;

    Ok(())
}
