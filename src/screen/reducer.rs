//! Reducer for the movie screen.

use std::collections::HashSet;

use crate::catalog::{Movie, GENRE_ALL};
use crate::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::MovieScreenState;

/// Reducer for movie screen state transitions.
///
/// Pure function: fetch side effects (timers, source loads) live in
/// the store, which feeds their outcomes back in as intents. User
/// commands outside the `Success` state are no-ops.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = MovieScreenState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::FetchStarted => MovieScreenState::Loading,

            CatalogIntent::CatalogLoaded { catalog } => MovieScreenState::Success {
                displayed_movies: catalog.movies.clone(),
                all_movies: catalog.movies,
                available_genres: catalog.genres,
                search_query: String::new(),
                selected_genre: GENRE_ALL.to_string(),
                favorite_movie_ids: HashSet::new(),
            },

            CatalogIntent::FetchFailed { message } => MovieScreenState::Error { message },

            CatalogIntent::ToggleFavorite { movie_id } => match state {
                MovieScreenState::Success {
                    all_movies,
                    displayed_movies,
                    available_genres,
                    search_query,
                    selected_genre,
                    mut favorite_movie_ids,
                } => {
                    // Ids the catalog does not contain never enter the set.
                    if !favorite_movie_ids.remove(&movie_id)
                        && all_movies.iter().any(|movie| movie.id == movie_id)
                    {
                        favorite_movie_ids.insert(movie_id);
                    }
                    MovieScreenState::Success {
                        all_movies,
                        displayed_movies,
                        available_genres,
                        search_query,
                        selected_genre,
                        favorite_movie_ids,
                    }
                }
                other => other,
            },

            CatalogIntent::SearchQueryChanged { query } => match state {
                MovieScreenState::Success {
                    all_movies,
                    available_genres,
                    selected_genre,
                    favorite_movie_ids,
                    ..
                } => {
                    let displayed_movies = filter_movies(&all_movies, &query, &selected_genre);
                    MovieScreenState::Success {
                        all_movies,
                        displayed_movies,
                        available_genres,
                        search_query: query,
                        selected_genre,
                        favorite_movie_ids,
                    }
                }
                other => other,
            },

            CatalogIntent::GenreSelected { genre } => match state {
                MovieScreenState::Success {
                    all_movies,
                    available_genres,
                    search_query,
                    favorite_movie_ids,
                    ..
                } => {
                    let displayed_movies = filter_movies(&all_movies, &search_query, &genre);
                    MovieScreenState::Success {
                        all_movies,
                        displayed_movies,
                        available_genres,
                        search_query,
                        selected_genre: genre,
                        favorite_movie_ids,
                    }
                }
                other => other,
            },
        }
    }
}

/// Restrict `movies` to the ones matching `genre` whose title contains
/// `query` under case-insensitive comparison.
///
/// The genre pass keeps everything when `genre` is the sentinel. A
/// genre outside the vocabulary matches nothing and yields an empty
/// result, not an error. Both passes are independent predicates, so the
/// result keeps the original order with no re-sorting.
pub fn filter_movies(movies: &[Movie], query: &str, genre: &str) -> Vec<Movie> {
    let query = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| genre == GENRE_ALL || movie.genre == genre)
        .filter(|movie| movie.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
