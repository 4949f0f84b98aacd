use serde::Serialize;

/// An album entry: a name, which uniquely identifies it, and a release year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub name: String,
    pub year: i32,
}
