mod common;

use std::sync::Arc;
use std::time::Duration;

use filmoteca::catalog::{MockMovieSource, GENRE_ALL};
use filmoteca::screen::{MovieCatalogStore, MovieScreenState};

use common::{FailingSource, FlakySource};

fn mock_store(delay: Duration) -> MovieCatalogStore {
    MovieCatalogStore::new(Arc::new(MockMovieSource::with_delay(delay)))
}

#[tokio::test(start_paused = true)]
async fn fetch_publishes_loading_then_a_seeded_success() {
    let store = mock_store(Duration::from_millis(1500));
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Success {
            all_movies,
            displayed_movies,
            available_genres,
            search_query,
            selected_genre,
            favorite_movie_ids,
        } => {
            assert_eq!(all_movies.len(), 7);
            assert_eq!(displayed_movies, all_movies);
            assert_eq!(available_genres.first().map(String::as_str), Some(GENRE_ALL));
            assert!(search_query.is_empty());
            assert_eq!(selected_genre, GENRE_ALL);
            assert!(favorite_movie_ids.is_empty());
        }
        other => panic!("expected Success, got {other:?}"),
    };
}

#[tokio::test(start_paused = true)]
async fn late_subscriber_immediately_sees_current_state() {
    let store = mock_store(Duration::from_millis(100));

    let mut rx = store.subscribe();
    rx.changed().await.expect("store alive");
    assert!(rx.borrow().is_success());

    // A receiver taken after the fetch completed starts at Success.
    assert!(store.subscribe().borrow().is_success());
}

#[tokio::test(start_paused = true)]
async fn commands_while_loading_are_noops_and_wake_nobody() {
    let store = mock_store(Duration::from_millis(1500));
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_loading());

    store.on_toggle_favorite(1);
    store.on_search_query_changed("batman");
    store.on_genre_selected("Drama");

    assert!(store.state().is_loading());
    assert!(!rx.has_changed().expect("store alive"));

    // The ignored commands must not leak into the eventual Success.
    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Success {
            search_query,
            selected_genre,
            favorite_movie_ids,
            ..
        } => {
            assert!(search_query.is_empty());
            assert_eq!(selected_genre, GENRE_ALL);
            assert!(favorite_movie_ids.is_empty());
        }
        other => panic!("expected Success, got {other:?}"),
    };
}

#[tokio::test(start_paused = true)]
async fn toggling_twice_through_the_store_round_trips() {
    let store = mock_store(Duration::ZERO);
    let mut rx = store.subscribe();
    rx.changed().await.expect("store alive");

    store.on_toggle_favorite(1);
    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Success { favorite_movie_ids, .. } => {
            assert_eq!(favorite_movie_ids.len(), 1);
            assert!(favorite_movie_ids.contains(&1));
        }
        other => panic!("expected Success, got {other:?}"),
    }

    store.on_toggle_favorite(1);
    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Success { favorite_movie_ids, .. } => {
            assert!(favorite_movie_ids.is_empty());
        }
        other => panic!("expected Success, got {other:?}"),
    };
}

#[tokio::test(start_paused = true)]
async fn refetch_restarts_from_loading_then_succeeds_once() {
    let store = mock_store(Duration::from_millis(1500));
    let mut rx = store.subscribe();
    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_success());

    store.fetch_movies();
    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_success());

    // And nothing further.
    let extra = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
    assert!(extra.is_err(), "unexpected extra emission");
}

#[tokio::test(start_paused = true)]
async fn newer_fetch_supersedes_the_in_flight_one() {
    let store = mock_store(Duration::from_millis(1500));
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_loading());

    // Restart while the first fetch is still in flight.
    store.fetch_movies();

    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_success());

    // Exactly one terminal emission: the superseded fetch never lands.
    let extra = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
    assert!(extra.is_err(), "superseded fetch published state");
}

#[tokio::test(start_paused = true)]
async fn failing_source_surfaces_error_and_retry_recovers() {
    let store = MovieCatalogStore::new(Arc::new(FlakySource::new()));
    let mut rx = store.subscribe();

    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Error { message } => {
            assert!(message.contains("temporary outage"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }

    store.fetch_movies();
    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_success());
}

#[tokio::test(start_paused = true)]
async fn error_state_is_stable_across_failed_retries() {
    let store = MovieCatalogStore::new(Arc::new(FailingSource {
        message: "backend offline",
    }));
    let mut rx = store.subscribe();

    rx.changed().await.expect("store alive");
    match &*rx.borrow_and_update() {
        MovieScreenState::Error { message } => {
            assert!(message.contains("backend offline"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }

    store.fetch_movies();
    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.expect("store alive");
    assert!(matches!(&*rx.borrow_and_update(), MovieScreenState::Error { .. }));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_store_cancels_the_in_flight_fetch() {
    let store = mock_store(Duration::from_secs(3600));
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_loading());

    drop(store);

    // The channel closes without a terminal emission.
    assert!(rx.changed().await.is_err());
    assert!(rx.borrow().is_loading());
}
