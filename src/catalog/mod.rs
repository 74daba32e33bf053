//! Data layer: the movie model and catalog sources.
//!
//! The data here is deliberately static: a fixed seven-movie catalog
//! behind a simulated delay. The `MovieSource` trait is the seam a real
//! data source (network, disk) would plug into.

mod movie;
mod source;

pub use movie::{Movie, MovieCatalog, GENRE_ALL};
pub use source::{mock_catalog, FetchError, MockMovieSource, MovieSource, DEFAULT_FETCH_DELAY};
