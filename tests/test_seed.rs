//! First-run seeding behavior: the catalog lands once, and only into an
//! empty store.

use tempfile::TempDir;
use tunedeck::{seed, Artist, MusicStore};

async fn open_test_store() -> (TempDir, MusicStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = MusicStore::open_at(dir.path().join("music.sqlite"))
        .await
        .unwrap();
    (dir, store)
}

#[tokio::test]
async fn seeds_an_empty_store_with_the_catalog() {
    let (_dir, store) = open_test_store().await;

    let applied = seed::apply_if_empty(&store).await.unwrap();
    assert!(applied);

    let artists = store.all_artists().await.unwrap();
    let artist_ids: Vec<&str> = artists.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(artist_ids, vec!["A", "B", "C"]);
    assert_eq!(artists[0].name, "Metallica");
    assert_eq!(artists[0].monthly_listeners, 8_234_567);
    assert_eq!(artists[0].album_count, 10);

    let songs = store.all_songs().await.unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].name, "Enter Sandman");
    assert_eq!(songs[1].name, "Nothing Else Matters");
    assert!(songs.iter().all(|s| !s.is_favorite));
    assert!(songs.iter().all(|s| s.artist_id == "A"));
}

#[tokio::test]
async fn seeded_songs_get_store_assigned_ids() {
    let (_dir, store) = open_test_store().await;
    seed::apply_if_empty(&store).await.unwrap();

    let mut ids: Vec<i64> = store
        .all_songs()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn second_run_inserts_nothing() {
    let (_dir, store) = open_test_store().await;

    assert!(seed::apply_if_empty(&store).await.unwrap());
    assert!(!seed::apply_if_empty(&store).await.unwrap());

    assert_eq!(store.all_artists().await.unwrap().len(), 3);
    assert_eq!(store.all_songs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn any_existing_artist_suppresses_seeding() {
    let (_dir, store) = open_test_store().await;

    store
        .insert_artist(Artist {
            id: "X".to_string(),
            name: "Local Band".to_string(),
            monthly_listeners: 12,
            album_count: 1,
        })
        .await
        .unwrap();

    // Emptiness is judged on artists alone, so no songs appear either.
    assert!(!seed::apply_if_empty(&store).await.unwrap());
    assert_eq!(store.all_artists().await.unwrap().len(), 1);
    assert!(store.all_songs().await.unwrap().is_empty());
}
