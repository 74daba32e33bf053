//! Shared test utilities: canned states and catalog sources.

#![allow(dead_code, unused_imports)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_core::future::BoxFuture;

use filmoteca::catalog::{mock_catalog, FetchError, MovieCatalog, MovieSource};
use filmoteca::mvi::Reducer;
use filmoteca::screen::{CatalogIntent, CatalogReducer, MovieScreenState};

/// A `Success` state seeded from the mock catalog, exactly as published
/// after a successful fetch.
pub fn fresh_success() -> MovieScreenState {
    CatalogReducer::reduce(
        MovieScreenState::Loading,
        CatalogIntent::CatalogLoaded {
            catalog: mock_catalog(),
        },
    )
}

pub fn search(state: MovieScreenState, query: &str) -> MovieScreenState {
    CatalogReducer::reduce(
        state,
        CatalogIntent::SearchQueryChanged {
            query: query.to_string(),
        },
    )
}

pub fn select_genre(state: MovieScreenState, genre: &str) -> MovieScreenState {
    CatalogReducer::reduce(
        state,
        CatalogIntent::GenreSelected {
            genre: genre.to_string(),
        },
    )
}

pub fn toggle(state: MovieScreenState, movie_id: u32) -> MovieScreenState {
    CatalogReducer::reduce(state, CatalogIntent::ToggleFavorite { movie_id })
}

/// Ids of the currently displayed movies, in display order.
pub fn displayed_ids(state: &MovieScreenState) -> Vec<u32> {
    match state {
        MovieScreenState::Success { displayed_movies, .. } => {
            displayed_movies.iter().map(|m| m.id).collect()
        }
        other => panic!("expected Success, got {other:?}"),
    }
}

pub fn favorites(state: &MovieScreenState) -> HashSet<u32> {
    match state {
        MovieScreenState::Success { favorite_movie_ids, .. } => favorite_movie_ids.clone(),
        other => panic!("expected Success, got {other:?}"),
    }
}

/// Source that always fails with the given message.
pub struct FailingSource {
    pub message: &'static str,
}

impl MovieSource for FailingSource {
    fn load(&self) -> BoxFuture<'static, Result<MovieCatalog, FetchError>> {
        let message = self.message.to_string();
        Box::pin(async move { Err(FetchError::FetchFailure(message)) })
    }
}

/// Source that fails the first load and succeeds afterwards.
pub struct FlakySource {
    failed_once: AtomicBool,
}

impl FlakySource {
    pub fn new() -> Self {
        Self {
            failed_once: AtomicBool::new(false),
        }
    }
}

impl MovieSource for FlakySource {
    fn load(&self) -> BoxFuture<'static, Result<MovieCatalog, FetchError>> {
        let first = !self.failed_once.swap(true, Ordering::SeqCst);
        Box::pin(async move {
            if first {
                Err(FetchError::FetchFailure("temporary outage".to_string()))
            } else {
                Ok(mock_catalog())
            }
        })
    }
}
