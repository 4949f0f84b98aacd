use std::io::Read;

use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// One row of an albums CSV export.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AlbumRecord {
    #[serde(rename = "Album Name")]
    pub name: String,

    #[serde(rename = "Release Year")]
    pub year: i32,
}

/// One row of a songs CSV export. An empty album column means the song
/// belongs to no album.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SongRecord {
    #[serde(rename = "Track Name")]
    pub name: String,

    #[serde(rename = "Album Name")]
    pub album: String,

    #[serde(rename = "Duration")]
    pub duration: f64,
}

/// Read album rows from `reader` and register every one of them. Returns how
/// many rows were applied.
pub fn read_albums<R: Read>(catalog: &mut Catalog, reader: R) -> Result<usize, CatalogError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut added = 0;
    for result in csv_reader.deserialize::<AlbumRecord>() {
        let record = result?;
        catalog.add_album(record.name, record.year);
        added += 1;
    }

    info!("Registered {} albums", added);
    Ok(added)
}

/// Read song rows from `reader` and add them to the catalog. Rows naming an
/// album that is not registered are skipped with a warning rather than
/// aborting the whole ingest. Returns `(added, skipped)`.
pub fn read_songs<R: Read>(catalog: &mut Catalog, reader: R) -> Result<(usize, usize), CatalogError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut added = 0;
    let mut skipped = 0;
    for result in csv_reader.deserialize::<SongRecord>() {
        let record = result?;
        let album = (!record.album.is_empty()).then_some(record.album);
        match catalog.add_song(record.name, album, record.duration) {
            Ok(()) => added += 1,
            Err(CatalogError::InvalidReference { album }) => {
                warn!("Skipping song row: album '{}' is not registered", album);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!("Ingested {} songs, skipped {}", added, skipped);
    Ok((added, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALBUMS_CSV: &str = "\
Album Name,Release Year
Meddle,1971
The Dark Side of the Moon,1973
";

    const SONGS_CSV: &str = "\
Track Name,Album Name,Duration
Echoes,Meddle,1412.0
Money,The Dark Side of the Moon,382.0
Flaming,,167.0
Lost One,Unknown Album,100.0
";

    #[test]
    fn albums_csv_registers_every_row() {
        let mut catalog = Catalog::new();
        let added = read_albums(&mut catalog, ALBUMS_CSV.as_bytes()).unwrap();
        assert_eq!(added, 2);
        assert_eq!(catalog.year_of("Meddle"), Some(1971));
        assert_eq!(catalog.year_of("The Dark Side of the Moon"), Some(1973));
    }

    #[test]
    fn songs_csv_skips_rows_with_unregistered_albums() {
        let mut catalog = Catalog::new();
        read_albums(&mut catalog, ALBUMS_CSV.as_bytes()).unwrap();
        let (added, skipped) = read_songs(&mut catalog, SONGS_CSV.as_bytes()).unwrap();
        assert_eq!(added, 3);
        assert_eq!(skipped, 1);
        assert_eq!(catalog.count_songs("Meddle"), 1);
        assert_eq!(catalog.count_songs("Unknown Album"), 0);
    }

    #[test]
    fn empty_album_column_means_no_album() {
        let mut catalog = Catalog::new();
        read_albums(&mut catalog, ALBUMS_CSV.as_bytes()).unwrap();
        read_songs(&mut catalog, SONGS_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.count_songs_in_no_album(), 1);
    }

    #[test]
    fn malformed_year_is_a_hard_error() {
        let mut catalog = Catalog::new();
        let result = read_albums(
            &mut catalog,
            "Album Name,Release Year\nMeddle,not-a-year\n".as_bytes(),
        );
        assert!(matches!(result, Err(CatalogError::Csv(_))));
    }

    #[test]
    fn header_only_files_ingest_nothing() {
        let mut catalog = Catalog::new();
        assert_eq!(
            read_albums(&mut catalog, "Album Name,Release Year\n".as_bytes()).unwrap(),
            0
        );
        assert_eq!(
            read_songs(&mut catalog, "Track Name,Album Name,Duration\n".as_bytes()).unwrap(),
            (0, 0)
        );
    }
}
