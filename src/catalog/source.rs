//! Catalog sources: where movie data comes from.
//!
//! The only shipped source is an in-memory mock behind a simulated
//! delay, so it can never actually fail. A real source would implement
//! `MovieSource` and populate the failure branch; the store converts
//! any failure into the screen's error state either way.

use std::time::Duration;

use futures_core::future::BoxFuture;
use thiserror::Error;

use super::movie::{Movie, MovieCatalog, GENRE_ALL};

/// Simulated latency of the mock source.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Errors a catalog source can produce.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The catalog could not be loaded.
    #[error("failed to load the movie catalog: {0}")]
    FetchFailure(String),
}

/// Seam between the store and a catalog backend.
///
/// `load` resolves to a complete catalog or fails as a whole; there is
/// no partial success.
pub trait MovieSource: Send + Sync {
    fn load(&self) -> BoxFuture<'static, Result<MovieCatalog, FetchError>>;
}

/// In-memory mock source: a fixed seven-movie catalog delivered after a
/// configurable delay.
#[derive(Debug, Clone)]
pub struct MockMovieSource {
    delay: Duration,
}

impl MockMovieSource {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    /// A mock source with a specific simulated delay. Zero is allowed.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockMovieSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieSource for MockMovieSource {
    fn load(&self) -> BoxFuture<'static, Result<MovieCatalog, FetchError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(mock_catalog())
        })
    }
}

/// The mock data set: seven movies and the genre vocabulary for the
/// filter chips, sentinel first.
///
/// Note that "Aventura" appears as a movie genre but not in the
/// vocabulary, so that movie is only reachable under [`GENRE_ALL`].
pub fn mock_catalog() -> MovieCatalog {
    let movies = vec![
        movie(
            1,
            "Interestelar",
            2014,
            "https://image.tmdb.org/t/p/w500/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            8.4,
            "Ficção Científica",
        ),
        movie(
            2,
            "O Poderoso Chefão",
            1972,
            "https://www.themoviedb.org/t/p/w600_and_h900_bestv2/uP46DujkD3nwcisOjz9a0Xw0Knj.jpg",
            8.7,
            "Drama",
        ),
        movie(
            3,
            "O Senhor dos Anéis: O Retorno do Rei",
            2003,
            "https://www.themoviedb.org/t/p/w600_and_h900_bestv2/egSO4klmc9pnI1CNnHoYKV70XKI.jpg",
            8.5,
            "Aventura",
        ),
        movie(
            4,
            "Pulp Fiction: Tempo de Violência",
            1994,
            "https://www.themoviedb.org/t/p/w600_and_h900_bestv2/tptjnB2LDbuUWya9Cx5sQtv5hqb.jpg",
            8.5,
            "Ação",
        ),
        movie(
            5,
            "Batman: O Cavaleiro das Trevas",
            2008,
            "https://www.themoviedb.org/t/p/w600_and_h900_bestv2/4lj1ikfsSmMZNyfdi8R8Tv5tsgb.jpg",
            8.5,
            "Ação",
        ),
        movie(
            6,
            "A Lista de Schindler",
            1993,
            "https://www.themoviedb.org/t/p/w600_and_h900_bestv2/fvPYwfXH513e8Nqe0kzWFm2jjg.jpg",
            8.6,
            "Drama",
        ),
        movie(
            7,
            "Forrest Gump: O Contador de Histórias",
            1994,
            "https://image.tmdb.org/t/p/w600_and_h900_bestv2/d74WpIsH8379TIL4wUxDneRCYv2.jpg",
            8.5,
            "Comédia",
        ),
    ];

    let genres = [GENRE_ALL, "Ação", "Drama", "Ficção Científica", "Comédia"]
        .into_iter()
        .map(String::from)
        .collect();

    MovieCatalog { movies, genres }
}

fn movie(
    id: u32,
    title: &str,
    release_year: u16,
    poster_url: &str,
    rating: f64,
    genre: &str,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        release_year,
        poster_url: poster_url.to_string(),
        rating,
        genre: genre.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_has_seven_movies_with_unique_ids() {
        let catalog = mock_catalog();
        assert_eq!(catalog.movies.len(), 7);

        let mut ids: Vec<u32> = catalog.movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn genre_vocabulary_starts_with_sentinel() {
        let catalog = mock_catalog();
        assert_eq!(catalog.genres.first().map(String::as_str), Some(GENRE_ALL));
    }
}
