//! The movie value type and catalog container.

use serde::{Deserialize, Serialize};

/// Sentinel genre meaning "no genre filter". Always first in a
/// catalog's genre vocabulary.
pub const GENRE_ALL: &str = "Todos";

/// A single movie in the catalog.
///
/// Value equality covers every field so state comparison picks up any
/// change; renderers diffing lists should key rows on `id` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique within one catalog.
    pub id: u32,
    pub title: String,
    pub release_year: u16,
    /// Poster image location. Never dereferenced by this crate.
    pub poster_url: String,
    pub rating: f64,
    /// One of the catalog's genre vocabulary entries.
    pub genre: String,
}

/// A complete catalog as delivered by a source: the movies in canonical
/// display order plus the genre vocabulary for the filter chips.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCatalog {
    pub movies: Vec<Movie>,
    /// Genre filter vocabulary, [`GENRE_ALL`] first.
    pub genres: Vec<String>,
}
