//! Domain models that mirror the SQLite schema and get passed throughout the
//! application. These stay light-weight data holders so the persistence and
//! presentation layers can focus on their own logic.

/// An artist row. Artist ids come from the seed catalog; the store never
/// generates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// Primary key, a caller-assigned string.
    pub id: String,
    pub name: String,
    pub monthly_listeners: i64,
    pub album_count: i64,
}

/// A song row.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Store-assigned primary key. Inserts may carry a placeholder here; the
    /// store overwrites it.
    pub id: i64,
    pub name: String,
    /// Logical reference to an [`Artist::id`]. Nothing enforces that the
    /// artist exists; a dangling value simply matches no artist.
    pub artist_id: String,
    pub genre: String,
    /// Length in whole seconds.
    pub duration: i64,
    pub is_favorite: bool,
}

impl Song {
    /// Format the duration as `m:ss` for list rows.
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with_duration(duration: i64) -> Song {
        Song {
            id: 1,
            name: "Enter Sandman".to_string(),
            artist_id: "A".to_string(),
            genre: "Heavy Metal".to_string(),
            duration,
            is_favorite: false,
        }
    }

    #[test]
    fn duration_formats_minutes_and_seconds() {
        assert_eq!(song_with_duration(332).duration_display(), "5:32");
        assert_eq!(song_with_duration(60).duration_display(), "1:00");
        assert_eq!(song_with_duration(59).duration_display(), "0:59");
    }
}
