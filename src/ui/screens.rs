use crate::models::{Artist, Song};

/// Backing state for the Explore tab, which lists the whole song catalog.
pub(crate) struct ExploreScreen {
    pub(crate) songs: Vec<Song>,
    pub(crate) selected: usize,
}

impl ExploreScreen {
    pub(crate) fn new(songs: Vec<Song>) -> Self {
        let mut screen = Self { songs, selected: 0 };
        screen.ensure_in_bounds();
        screen
    }

    /// Swap in a fresh snapshot, keeping the selection inside the new list.
    pub(crate) fn set_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.ensure_in_bounds();
    }

    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = clamp_move(self.selected, offset, self.songs.len());
    }

    pub(crate) fn select_first(&mut self) {
        if !self.songs.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.songs.is_empty() {
            self.selected = self.songs.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.songs.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.songs.len() {
            self.selected = self.songs.len() - 1;
        }
    }
}

/// Backing state for the artist list tab.
pub(crate) struct ArtistsScreen {
    pub(crate) artists: Vec<Artist>,
    pub(crate) selected: usize,
}

impl ArtistsScreen {
    pub(crate) fn new(artists: Vec<Artist>) -> Self {
        let mut screen = Self {
            artists,
            selected: 0,
        };
        screen.ensure_in_bounds();
        screen
    }

    pub(crate) fn set_artists(&mut self, artists: Vec<Artist>) {
        self.artists = artists;
        self.ensure_in_bounds();
    }

    pub(crate) fn current_artist(&self) -> Option<&Artist> {
        self.artists.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = clamp_move(self.selected, offset, self.artists.len());
    }

    pub(crate) fn select_first(&mut self) {
        if !self.artists.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.artists.is_empty() {
            self.selected = self.artists.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.artists.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.artists.len() {
            self.selected = self.artists.len() - 1;
        }
    }
}

/// Backing state for the drill-in view on one artist. Holds only that artist's
/// songs; the filter re-runs whenever a fresh full snapshot arrives.
pub(crate) struct ArtistDetailScreen {
    pub(crate) artist: Artist,
    pub(crate) songs: Vec<Song>,
    pub(crate) selected: usize,
}

impl ArtistDetailScreen {
    pub(crate) fn new(artist: Artist, all_songs: &[Song]) -> Self {
        let songs = filter_by_artist(all_songs, &artist.id);
        Self {
            artist,
            songs,
            selected: 0,
        }
    }

    /// Re-derive this artist's songs from a fresh full snapshot.
    pub(crate) fn set_songs(&mut self, all_songs: &[Song]) {
        self.songs = filter_by_artist(all_songs, &self.artist.id);
        self.ensure_in_bounds();
    }

    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = clamp_move(self.selected, offset, self.songs.len());
    }

    pub(crate) fn select_first(&mut self) {
        if !self.songs.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.songs.is_empty() {
            self.selected = self.songs.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.songs.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.songs.len() {
            self.selected = self.songs.len() - 1;
        }
    }
}

fn filter_by_artist(songs: &[Song], artist_id: &str) -> Vec<Song> {
    songs
        .iter()
        .filter(|song| song.artist_id == artist_id)
        .cloned()
        .collect()
}

fn clamp_move(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut new = selected as isize + offset;
    if new < 0 {
        new = 0;
    }
    if new >= len as isize {
        new = len as isize - 1;
    }
    new as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, name: &str, artist_id: &str) -> Song {
        Song {
            id,
            name: name.to_string(),
            artist_id: artist_id.to_string(),
            genre: "Heavy Metal".to_string(),
            duration: 300,
            is_favorite: false,
        }
    }

    #[test]
    fn clamp_move_stays_inside_list() {
        assert_eq!(clamp_move(0, -1, 3), 0);
        assert_eq!(clamp_move(2, 5, 3), 2);
        assert_eq!(clamp_move(1, 1, 3), 2);
        assert_eq!(clamp_move(0, 1, 0), 0);
    }

    #[test]
    fn detail_screen_filters_to_its_artist() {
        let artist = Artist {
            id: "A".to_string(),
            name: "Metallica".to_string(),
            monthly_listeners: 1,
            album_count: 1,
        };
        let songs = vec![song(1, "One", "A"), song(2, "Two", "B"), song(3, "Three", "A")];

        let screen = ArtistDetailScreen::new(artist, &songs);
        let names: Vec<&str> = screen.songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Three"]);
    }

    #[test]
    fn detail_screen_handles_dangling_artist_reference() {
        let artist = Artist {
            id: "ghost".to_string(),
            name: "Nobody".to_string(),
            monthly_listeners: 0,
            album_count: 0,
        };
        let songs = vec![song(1, "One", "A")];

        let screen = ArtistDetailScreen::new(artist, &songs);
        assert!(screen.songs.is_empty());
        assert!(screen.current_song().is_none());
    }

    #[test]
    fn shrinking_snapshot_pulls_selection_back_in_bounds() {
        let mut screen = ExploreScreen::new(vec![
            song(1, "One", "A"),
            song(2, "Two", "A"),
            song(3, "Three", "A"),
        ]);
        screen.select_last();
        assert_eq!(screen.selected, 2);

        screen.set_songs(vec![song(1, "One", "A")]);
        assert_eq!(screen.selected, 0);
        assert_eq!(screen.current_song().map(|s| s.id), Some(1));
    }
}
