//! Intents for the movie screen.

use crate::catalog::MovieCatalog;
use crate::mvi::Intent;

/// Intents dispatched to the catalog reducer: the screen's user
/// commands plus the fetch lifecycle events the store feeds back in.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A fetch began; show the loading state.
    FetchStarted,

    /// A fetch resolved with the complete catalog.
    CatalogLoaded { catalog: MovieCatalog },

    /// A fetch failed.
    FetchFailed { message: String },

    /// Add a movie to the favorites set, or remove it if present.
    ToggleFavorite { movie_id: u32 },

    /// The search field text changed.
    SearchQueryChanged { query: String },

    /// A genre chip was selected.
    GenreSelected { genre: String },
}

impl Intent for CatalogIntent {}
