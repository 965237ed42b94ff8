//! Store integration tests covering the query surface end to end against
//! throwaway database files.

use tempfile::TempDir;
use tunedeck::{Artist, MusicStore, Song, StoreError};

async fn open_test_store() -> (TempDir, MusicStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = MusicStore::open_at(dir.path().join("music.sqlite"))
        .await
        .unwrap();
    (dir, store)
}

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        monthly_listeners: 1_000,
        album_count: 1,
    }
}

fn song(name: &str, artist_id: &str) -> Song {
    Song {
        id: 0,
        name: name.to_string(),
        artist_id: artist_id.to_string(),
        genre: "Heavy Metal".to_string(),
        duration: 300,
        is_favorite: false,
    }
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let (_dir, store) = open_test_store().await;
    assert!(store.all_songs().await.unwrap().is_empty());
    assert!(store.all_artists().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_song_assigns_fresh_ids() {
    let (_dir, store) = open_test_store().await;

    let first = store
        .insert_song(Song {
            id: 999,
            ..song("Enter Sandman", "A")
        })
        .await
        .unwrap();
    let second = store
        .insert_song(Song {
            id: 999,
            ..song("Nothing Else Matters", "A")
        })
        .await
        .unwrap();

    assert_eq!(first.id, 1, "supplied id should be ignored");
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn insert_song_round_trips_every_field_except_id() {
    let (_dir, store) = open_test_store().await;

    let inserted = store
        .insert_song(Song {
            id: 0,
            name: "Flying Whales".to_string(),
            artist_id: "B".to_string(),
            genre: "Progressive Metal".to_string(),
            duration: 467,
            is_favorite: true,
        })
        .await
        .unwrap();

    let listed = store.all_songs().await.unwrap();
    assert_eq!(listed.len(), 1);
    let fetched = &listed[0];
    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.name, "Flying Whales");
    assert_eq!(fetched.artist_id, "B");
    assert_eq!(fetched.genre, "Progressive Metal");
    assert_eq!(fetched.duration, 467);
    assert!(fetched.is_favorite);
}

#[tokio::test]
async fn songs_sort_favorites_first_then_by_name() {
    let (_dir, store) = open_test_store().await;

    store
        .insert_song(Song {
            is_favorite: true,
            ..song("Whiskey In The Jar", "A")
        })
        .await
        .unwrap();
    store.insert_song(song("Clouds", "B")).await.unwrap();
    store
        .insert_song(Song {
            is_favorite: true,
            ..song("Bleed", "C")
        })
        .await
        .unwrap();
    store.insert_song(song("Aerials", "D")).await.unwrap();

    let names: Vec<String> = store
        .all_songs()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        vec!["Bleed", "Whiskey In The Jar", "Aerials", "Clouds"]
    );
}

#[tokio::test]
async fn duplicate_artist_id_is_rejected() {
    let (_dir, store) = open_test_store().await;

    store.insert_artist(artist("A", "Metallica")).await.unwrap();
    let err = store
        .insert_artist(artist("A", "Impostor"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateArtist(ref id) if id == "A"));

    // The original row must survive untouched.
    let artists = store.all_artists().await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Metallica");
}

#[tokio::test]
async fn set_favorite_flips_exactly_one_row() {
    let (_dir, store) = open_test_store().await;

    let sandman = store.insert_song(song("Enter Sandman", "A")).await.unwrap();
    let matters = store
        .insert_song(song("Nothing Else Matters", "A"))
        .await
        .unwrap();

    store.set_favorite(sandman.id, true).await.unwrap();

    let songs = store.all_songs().await.unwrap();
    let favorite_state = |id: i64| songs.iter().find(|s| s.id == id).unwrap().is_favorite;
    assert!(favorite_state(sandman.id));
    assert!(!favorite_state(matters.id));
}

#[tokio::test]
async fn set_favorite_on_missing_id_is_a_quiet_no_op() {
    let (_dir, store) = open_test_store().await;
    store.insert_song(song("Enter Sandman", "A")).await.unwrap();

    store.set_favorite(4242, true).await.unwrap();

    let songs = store.all_songs().await.unwrap();
    assert_eq!(songs.len(), 1);
    assert!(!songs[0].is_favorite);
}

#[tokio::test]
async fn update_song_replaces_every_column() {
    let (_dir, store) = open_test_store().await;
    let inserted = store.insert_song(song("Draft Title", "A")).await.unwrap();

    store
        .update_song(Song {
            id: inserted.id,
            name: "Final Title".to_string(),
            artist_id: "B".to_string(),
            genre: "Doom Metal".to_string(),
            duration: 512,
            is_favorite: true,
        })
        .await
        .unwrap();

    let songs = store.all_songs().await.unwrap();
    assert_eq!(songs.len(), 1);
    let updated = &songs[0];
    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.name, "Final Title");
    assert_eq!(updated.artist_id, "B");
    assert_eq!(updated.genre, "Doom Metal");
    assert_eq!(updated.duration, 512);
    assert!(updated.is_favorite);
}

#[tokio::test]
async fn update_song_on_missing_id_changes_nothing() {
    let (_dir, store) = open_test_store().await;
    store.insert_song(song("Enter Sandman", "A")).await.unwrap();

    store
        .update_song(Song {
            id: 999,
            ..song("Phantom", "Z")
        })
        .await
        .unwrap();

    let songs = store.all_songs().await.unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].name, "Enter Sandman");
}

#[tokio::test]
async fn dangling_artist_reference_still_lists() {
    let (_dir, store) = open_test_store().await;

    store
        .insert_song(song("Orphaned Track", "nobody"))
        .await
        .unwrap();

    let songs = store.all_songs().await.unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].artist_id, "nobody");
    assert!(store.all_artists().await.unwrap().is_empty());
}

#[tokio::test]
async fn reopening_the_same_file_sees_prior_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("music.sqlite");

    {
        let store = MusicStore::open_at(path.clone()).await.unwrap();
        store.insert_artist(artist("A", "Metallica")).await.unwrap();
        store.insert_song(song("Enter Sandman", "A")).await.unwrap();
    }

    let reopened = MusicStore::open_at(path).await.unwrap();
    assert_eq!(reopened.all_artists().await.unwrap().len(), 1);
    assert_eq!(reopened.all_songs().await.unwrap().len(), 1);
}
