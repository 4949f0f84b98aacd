use std::fmt;
use std::hash::{Hash, Hasher};

/// A single song entry. Value-typed: two songs with the same name, album and
/// duration are the same song.
#[derive(Debug, Clone)]
pub struct Song {
    pub name: String,
    /// Album this song belongs to, referenced by name. Singles have none.
    pub album: Option<String>,
    /// Duration in seconds.
    pub duration: f64,
}

// f64 rules out derived Eq/Hash; compare and hash the duration by bit
// pattern so identical triples collapse to one set member.
impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.album {
            Some(ref album) => write!(f, "{} [{}] ({}s)", self.name, album, self.duration),
            None => write!(f, "{} ({}s)", self.name, self.duration),
        }
    }
}
