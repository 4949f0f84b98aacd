use std::fmt;

use serde::Serialize;

use crate::album::Album;
use crate::catalog::Catalog;

/// Aggregate summary of a catalog, for terminal display or JSON output.
///
/// Unlike the raw catalog queries, every degenerate case is absorbed here:
/// an empty catalog gives zero counts and `None` fields, never NaN or an
/// error.
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub albums: usize,
    pub songs: usize,
    pub songs_in_no_album: usize,
    pub longest_song: Option<String>,
    pub latest_album: Option<Album>,
    pub average_duration: Option<f64>,
}

impl From<&Catalog> for CatalogReport {
    fn from(catalog: &Catalog) -> Self {
        let latest_album = catalog.longest_album().ok().map(|name| Album {
            name: name.to_string(),
            year: catalog.year_of(name).unwrap_or_default(),
        });

        let songs = catalog.song_count();
        let average_duration =
            (songs > 0).then(|| catalog.songs().map(|s| s.duration).sum::<f64>() / songs as f64);

        CatalogReport {
            albums: catalog.album_count(),
            songs,
            songs_in_no_album: catalog.count_songs_in_no_album(),
            longest_song: catalog.longest_song().map(str::to_string),
            latest_album,
            average_duration,
        }
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Albums:            {}", self.albums)?;
        writeln!(f, "Songs:             {}", self.songs)?;
        writeln!(f, "Songs in no album: {}", self.songs_in_no_album)?;
        if let Some(ref name) = self.longest_song {
            writeln!(f, "Longest song:      {}", name)?;
        }
        if let Some(ref album) = self.latest_album {
            writeln!(f, "Latest album:      {} ({})", album.name, album.year)?;
        }
        if let Some(avg) = self.average_duration {
            writeln!(f, "Average duration:  {:.1}s", avg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_reports_zeros_and_absent_fields() {
        let report = CatalogReport::from(&Catalog::new());
        assert_eq!(report.albums, 0);
        assert_eq!(report.songs, 0);
        assert_eq!(report.songs_in_no_album, 0);
        assert_eq!(report.longest_song, None);
        assert_eq!(report.latest_album, None);
        assert_eq!(report.average_duration, None);
    }

    #[test]
    fn report_figures_match_the_catalog() {
        let mut catalog = Catalog::new();
        catalog.add_album("X", 2000);
        catalog.add_album("Y", 2010);
        catalog.add_song("S1", Some("X".to_string()), 100.0).unwrap();
        catalog.add_song("S2", Some("X".to_string()), 200.0).unwrap();
        catalog.add_song("S3", None, 300.0).unwrap();

        let report = CatalogReport::from(&catalog);
        assert_eq!(report.albums, 2);
        assert_eq!(report.songs, 3);
        assert_eq!(report.songs_in_no_album, 1);
        assert_eq!(report.longest_song.as_deref(), Some("S3"));
        assert_eq!(
            report.latest_album,
            Some(Album {
                name: "Y".to_string(),
                year: 2010
            })
        );
        assert_eq!(report.average_duration, Some(200.0));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut catalog = Catalog::new();
        catalog.add_album("X", 2000);

        let json = serde_json::to_value(CatalogReport::from(&catalog)).unwrap();
        assert_eq!(json["albums"], 1);
        assert_eq!(json["songs"], 0);
        assert_eq!(json["latest_album"]["name"], "X");
        assert_eq!(json["latest_album"]["year"], 2000);
        assert!(json["longest_song"].is_null());
    }
}
