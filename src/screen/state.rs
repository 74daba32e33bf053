//! View state for the movie screen.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Movie;
use crate::mvi::UiState;

/// The states the movie screen can be in.
///
/// Exactly one variant is active at a time. Consumers match
/// exhaustively, so adding a variant forces every front-end to handle
/// it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum MovieScreenState {
    /// Initial load (or a re-fetch) in progress.
    #[default]
    Loading,

    /// The fetch failed. Recoverable: re-fetching returns to `Loading`.
    Error { message: String },

    /// Catalog loaded; everything the screen needs to render.
    Success {
        /// The unfiltered catalog, in canonical display order.
        all_movies: Vec<Movie>,

        /// Derived: `all_movies` restricted by the current query and
        /// genre. The reducer keeps this in sync on every transition.
        displayed_movies: Vec<Movie>,

        /// Genre filter vocabulary, sentinel first. Stable for the
        /// lifetime of one successful fetch.
        available_genres: Vec<String>,

        /// Current search field text. Empty means no search filter.
        search_query: String,

        /// Currently selected genre chip.
        selected_genre: String,

        /// Ids of favorited movies. Only ever contains ids present in
        /// `all_movies`.
        favorite_movie_ids: HashSet<u32>,
    },
}

impl UiState for MovieScreenState {}

impl MovieScreenState {
    /// Check if a fetch is in progress.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the catalog is loaded and commands will apply.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
