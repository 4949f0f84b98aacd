use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::CatalogError;
use crate::song::Song;

/// The whole music collection: albums keyed by name, songs kept as a
/// value-set. Owns both containers; songs point at albums by name only.
#[derive(Debug, Default)]
pub struct Catalog {
    albums: HashMap<String, i32>,
    songs: HashSet<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an album. Registering the same name again overwrites the
    /// year (last write wins). Albums are never removed.
    pub fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();
        match self.albums.insert(name.clone(), year) {
            Some(old) if old != year => {
                debug!("Album '{}' re-registered, year {} -> {}", name, old, year)
            }
            Some(_) => {}
            None => debug!("Album registered: '{}' ({})", name, year),
        }
    }

    /// Add a song. If an album is given it must already be registered,
    /// otherwise the add fails and the song set is left untouched. Adding an
    /// identical (name, album, duration) triple twice is a no-op.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<String>,
        duration: f64,
    ) -> Result<(), CatalogError> {
        if let Some(album) = album.as_deref()
            && !self.albums.contains_key(album)
        {
            return Err(CatalogError::InvalidReference {
                album: album.to_string(),
            });
        }

        let song = Song {
            name: name.into(),
            album,
            duration,
        };
        debug!("Adding song: {}", song);
        if !self.songs.insert(song) {
            debug!("Identical song already present, ignored");
        }
        Ok(())
    }

    /// All song names, sorted ascending. Songs sharing a name but differing
    /// in album or duration each contribute their own entry.
    pub fn ordered_song_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.songs.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// All album names, in no particular order.
    pub fn album_names(&self) -> Vec<String> {
        self.albums.keys().cloned().collect()
    }

    /// Names of the albums released in `year`, in no particular order.
    pub fn albums_in_year(&self, year: i32) -> Vec<String> {
        self.albums
            .iter()
            .filter(|&(_, y)| *y == year)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// How many songs belong to `album_name`. The name is not checked
    /// against the album map; unknown names simply count zero.
    pub fn count_songs(&self, album_name: &str) -> usize {
        self.songs
            .iter()
            .filter(|s| s.album.as_deref() == Some(album_name))
            .count()
    }

    /// How many songs belong to no album at all.
    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|s| s.album.is_none()).count()
    }

    /// Mean duration of the songs on `album_name`.
    ///
    /// When no songs match (unknown album, or an album nothing was added to)
    /// this is a 0.0 / 0.0 division and the result is NaN, not an absent
    /// value.
    pub fn average_duration_of_songs(&self, album_name: &str) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for song in self
            .songs
            .iter()
            .filter(|s| s.album.as_deref() == Some(album_name))
        {
            sum += song.duration;
            count += 1;
        }
        sum / count as f64
    }

    /// Name of the song with the greatest duration, or `None` when there are
    /// no songs. Ties resolve to whichever song the scan meets first.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .max_by(|a, b| a.duration.total_cmp(&b.duration))
            .map(|s| s.name.as_str())
    }

    /// Name of the album with the greatest release year. Fails with
    /// [`CatalogError::EmptyCatalog`] when no album was ever registered.
    pub fn longest_album(&self) -> Result<&str, CatalogError> {
        self.albums
            .iter()
            .max_by_key(|&(_, year)| year)
            .map(|(name, _)| name.as_str())
            .ok_or(CatalogError::EmptyCatalog)
    }

    /// Release year of `album_name`, if it is registered.
    pub fn year_of(&self, album_name: &str) -> Option<i32> {
        self.albums.get(album_name).copied()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// All songs, in no particular order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }
}
