//! In-memory view over the store. The UI reads list snapshots from here and
//! pushes favorite toggles back through it; every mutation is followed by a
//! full re-query so the snapshots always mirror what the database returned
//! last.

use log::error;
use tokio::sync::watch;

use crate::db::{MusicStore, StoreError};
use crate::models::{Artist, Song};

/// Holds the current song and artist lists. Snapshot reads never block;
/// refreshes happen on background tasks that publish through watch channels.
/// Dropping the library abandons any in-flight refresh, its result is simply
/// discarded.
pub struct Library {
    store: MusicStore,
    songs_tx: watch::Sender<Vec<Song>>,
    songs_rx: watch::Receiver<Vec<Song>>,
    artists_tx: watch::Sender<Vec<Artist>>,
    artists_rx: watch::Receiver<Vec<Artist>>,
}

impl Library {
    /// Build the holder and kick off background loads of both lists. Until
    /// those complete, reads see empty lists.
    pub fn new(store: MusicStore) -> Library {
        let (songs_tx, songs_rx) = watch::channel(Vec::new());
        let (artists_tx, artists_rx) = watch::channel(Vec::new());
        let library = Library {
            store,
            songs_tx,
            songs_rx,
            artists_tx,
            artists_rx,
        };
        library.reload_songs();
        library.reload_artists();
        library
    }

    /// Latest completed song snapshot, favorites first.
    pub fn songs(&self) -> Vec<Song> {
        self.songs_rx.borrow().clone()
    }

    /// Latest completed artist snapshot.
    pub fn artists(&self) -> Vec<Artist> {
        self.artists_rx.borrow().clone()
    }

    /// Watch for song-list changes. The returned receiver treats the snapshot
    /// current at subscription time as already seen.
    pub fn subscribe_songs(&self) -> watch::Receiver<Vec<Song>> {
        self.songs_tx.subscribe()
    }

    /// Watch for artist-list changes.
    pub fn subscribe_artists(&self) -> watch::Receiver<Vec<Artist>> {
        self.artists_tx.subscribe()
    }

    /// Flip the favorite flag on `song`, then re-query the whole song list.
    /// The snapshot is only replaced once the store round-trip finishes, so
    /// readers never see a locally patched list.
    pub fn toggle_favorite(&self, song: &Song) {
        let store = self.store.clone();
        let songs_tx = self.songs_tx.clone();
        let song_id = song.id;
        let target = !song.is_favorite;
        tokio::spawn(async move {
            if let Err(err) = toggle_and_reload(&store, &songs_tx, song_id, target).await {
                error!("favorite toggle for song {song_id} failed: {err}");
            }
        });
    }

    /// Re-query the song list on a background task.
    pub fn reload_songs(&self) {
        let store = self.store.clone();
        let songs_tx = self.songs_tx.clone();
        tokio::spawn(async move {
            match store.all_songs().await {
                Ok(songs) => {
                    let _ = songs_tx.send(songs);
                }
                Err(err) => error!("song reload failed: {err}"),
            }
        });
    }

    /// Re-query the artist list on a background task.
    pub fn reload_artists(&self) {
        let store = self.store.clone();
        let artists_tx = self.artists_tx.clone();
        tokio::spawn(async move {
            match store.all_artists().await {
                Ok(artists) => {
                    let _ = artists_tx.send(artists);
                }
                Err(err) => error!("artist reload failed: {err}"),
            }
        });
    }
}

async fn toggle_and_reload(
    store: &MusicStore,
    songs_tx: &watch::Sender<Vec<Song>>,
    song_id: i64,
    is_favorite: bool,
) -> Result<(), StoreError> {
    store.set_favorite(song_id, is_favorite).await?;
    let songs = store.all_songs().await?;
    let _ = songs_tx.send(songs);
    Ok(())
}
