//! The movie catalog store: single source of truth for the screen.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::catalog::MovieSource;
use crate::mvi::Reducer;

use super::intent::CatalogIntent;
use super::reducer::CatalogReducer;
use super::state::MovieScreenState;

/// Owns the movie screen state and the logic that mutates it.
///
/// Front-ends observe through [`MovieCatalogStore::subscribe`] and feed
/// user commands back via the `on_*` methods. State is published over a
/// `watch` channel: late subscribers immediately see the latest value,
/// updates reach all current subscribers in emission order, and equal
/// states are conflated.
///
/// Commands are synchronous; fetching is the only asynchronous
/// operation. A newer fetch supersedes an older in-flight one
/// (latest-wins), and dropping the store cancels any in-flight fetch,
/// so a dead store never publishes.
pub struct MovieCatalogStore {
    state_tx: watch::Sender<MovieScreenState>,
    source: Arc<dyn MovieSource>,
    /// Monotonic fetch counter. A completion carrying a stale sequence
    /// number is discarded instead of overwriting newer state.
    fetch_seq: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl MovieCatalogStore {
    /// Create a store and trigger the initial fetch.
    ///
    /// Must be called inside a Tokio runtime: the fetch task is spawned
    /// immediately. The state starts as `Loading`.
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        let (state_tx, _) = watch::channel(MovieScreenState::Loading);
        let store = Self {
            state_tx,
            source,
            fetch_seq: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        };
        store.fetch_movies();
        store
    }

    /// Observe the state stream.
    ///
    /// The receiver starts at the current value, so subscribing late
    /// never misses the present state.
    pub fn subscribe(&self) -> watch::Receiver<MovieScreenState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> MovieScreenState {
        self.state_tx.borrow().clone()
    }

    /// (Re-)load the catalog.
    ///
    /// Publishes `Loading` immediately, then exactly one `Success` or
    /// `Error` when the source resolves. Calling again while a fetch is
    /// in flight restarts from `Loading`; the superseded fetch is
    /// aborted and its completion, should it still land, is discarded.
    pub fn fetch_movies(&self) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        info!(seq, "fetching movie catalog");
        dispatch(&self.state_tx, CatalogIntent::FetchStarted);

        let source = Arc::clone(&self.source);
        let fetch_seq = Arc::clone(&self.fetch_seq);
        let state_tx = self.state_tx.clone();
        let task = tokio::spawn(async move {
            let intent = match source.load().await {
                Ok(catalog) => {
                    info!(seq, movies = catalog.movies.len(), "movie catalog loaded");
                    CatalogIntent::CatalogLoaded { catalog }
                }
                Err(err) => {
                    warn!(seq, error = %err, "movie catalog fetch failed");
                    CatalogIntent::FetchFailed {
                        message: err.to_string(),
                    }
                }
            };

            // The staleness check runs inside the publish lock: a newer
            // fetch bumps the sequence before it publishes `Loading`,
            // so a stale completion can never land on top of it.
            state_tx.send_if_modified(|state| {
                if fetch_seq.load(Ordering::SeqCst) != seq {
                    debug!(seq, "discarding superseded fetch completion");
                    return false;
                }
                let previous = state.clone();
                *state = CatalogReducer::reduce(mem::take(state), intent);
                *state != previous
            });
        });

        if let Some(previous) = self.in_flight.lock().replace(task) {
            previous.abort();
        }
    }

    /// Add `movie_id` to the favorites set, or remove it if present.
    /// No-op unless the catalog is loaded.
    pub fn on_toggle_favorite(&self, movie_id: u32) {
        dispatch(&self.state_tx, CatalogIntent::ToggleFavorite { movie_id });
    }

    /// Update the search text and recompute the displayed movies.
    /// No-op unless the catalog is loaded.
    pub fn on_search_query_changed(&self, query: impl Into<String>) {
        dispatch(
            &self.state_tx,
            CatalogIntent::SearchQueryChanged {
                query: query.into(),
            },
        );
    }

    /// Select a genre chip and recompute the displayed movies.
    /// No-op unless the catalog is loaded.
    pub fn on_genre_selected(&self, genre: impl Into<String>) {
        dispatch(
            &self.state_tx,
            CatalogIntent::GenreSelected {
                genre: genre.into(),
            },
        );
    }
}

impl Drop for MovieCatalogStore {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.lock().take() {
            task.abort();
        }
    }
}

/// Run one intent through the reducer and publish the result if it
/// changed. Intents that do not change the state wake no subscribers.
fn dispatch(state_tx: &watch::Sender<MovieScreenState>, intent: CatalogIntent) {
    debug!(?intent, "dispatching intent");
    state_tx.send_if_modified(|state| {
        let previous = state.clone();
        *state = CatalogReducer::reduce(mem::take(state), intent);
        *state != previous
    });
}
