//! Fixed starter catalog inserted the first time the app runs against an
//! empty database. The catalog functions are pure; [`apply_if_empty`] is the
//! only place they meet the store.

use log::info;

use crate::db::{MusicStore, StoreError};
use crate::models::{Artist, Song};

/// Seed-only artist record. Carries borrowed strings so the catalog can live
/// in static data; [`ArtistSeed::into_artist`] produces the owned row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_listeners: i64,
    pub album_count: i64,
}

/// Seed-only song record. The `id` reflects generation order and is discarded
/// on conversion since the store assigns real song ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SongSeed {
    pub id: i64,
    pub name: &'static str,
    pub artist_id: &'static str,
    pub genre: &'static str,
    pub duration: i64,
}

impl ArtistSeed {
    pub fn into_artist(self) -> Artist {
        Artist {
            id: self.id.to_string(),
            name: self.name.to_string(),
            monthly_listeners: self.monthly_listeners,
            album_count: self.album_count,
        }
    }
}

impl SongSeed {
    pub fn into_song(self) -> Song {
        Song {
            id: 0,
            name: self.name.to_string(),
            artist_id: self.artist_id.to_string(),
            genre: self.genre.to_string(),
            duration: self.duration,
            is_favorite: false,
        }
    }
}

/// The artist catalog. Ids are hand-picked and land in the database as-is.
pub fn artists() -> Vec<ArtistSeed> {
    vec![
        ArtistSeed {
            id: "A",
            name: "Metallica",
            monthly_listeners: 8_234_567,
            album_count: 10,
        },
        ArtistSeed {
            id: "B",
            name: "Gojira",
            monthly_listeners: 1_234_567,
            album_count: 6,
        },
        ArtistSeed {
            id: "C",
            name: "Taylor Swift",
            monthly_listeners: 9_876_543,
            album_count: 9,
        },
    ]
}

/// The song catalog. Ids count up from 1 in listing order.
pub fn songs() -> Vec<SongSeed> {
    [
        ("Enter Sandman", "A", "Heavy Metal", 332),
        ("Nothing Else Matters", "A", "Heavy Metal", 386),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, artist_id, genre, duration), id)| SongSeed {
        id,
        name,
        artist_id,
        genre,
        duration,
    })
    .collect()
}

/// Insert the catalog when the store holds no artists yet, artists before
/// songs. Returns whether anything was inserted. The emptiness check and the
/// inserts are not atomic; running two of these concurrently can fail on the
/// artist primary key.
pub async fn apply_if_empty(store: &MusicStore) -> Result<bool, StoreError> {
    if !store.all_artists().await?.is_empty() {
        return Ok(false);
    }

    info!("store is empty, inserting seed data");
    let artists = artists();
    let songs = songs();
    let artist_count = artists.len();
    let song_count = songs.len();

    for seed in artists {
        store.insert_artist(seed.into_artist()).await?;
    }
    for seed in songs {
        store.insert_song(seed.into_song()).await?;
    }

    info!("seeded {artist_count} artists and {song_count} songs");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_deterministic() {
        assert_eq!(artists(), artists());
        assert_eq!(songs(), songs());
    }

    #[test]
    fn song_ids_count_up_from_one() {
        let ids: Vec<i64> = songs().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn artist_conversion_preserves_every_field() {
        let seed = artists().remove(0);
        let artist = seed.clone().into_artist();
        assert_eq!(artist.id, seed.id);
        assert_eq!(artist.name, seed.name);
        assert_eq!(artist.monthly_listeners, seed.monthly_listeners);
        assert_eq!(artist.album_count, seed.album_count);
    }

    #[test]
    fn song_conversion_resets_id_and_favorite() {
        let seed = songs().remove(0);
        let song = seed.clone().into_song();
        assert_eq!(song.id, 0);
        assert!(!song.is_favorite);
        assert_eq!(song.name, seed.name);
        assert_eq!(song.artist_id, seed.artist_id);
        assert_eq!(song.genre, seed.genre);
        assert_eq!(song.duration, seed.duration);
    }
}
