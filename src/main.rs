//! Line-driven console driver for the movie catalog store.
//!
//! Subscribes to the store's state stream and re-prints on every
//! change; stdin commands map 1:1 to the store's public contract. This
//! is the reference consumer of the presentation core, not a rendering
//! framework.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use filmoteca::args::Cli;
use filmoteca::catalog::MockMovieSource;
use filmoteca::config::Config;
use filmoteca::screen::{MovieCatalogStore, MovieScreenState};

/// Initialize tracing to stderr so state output on stdout stays clean.
///
/// Quiet by default; set `RUST_LOG` to see store internals
/// (e.g. `RUST_LOG=filmoteca=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(delay_ms) = cli.delay_ms {
        config.fetch.delay_ms = delay_ms;
    }

    let source = Arc::new(MockMovieSource::with_delay(config.fetch.delay()));
    let store = MovieCatalogStore::new(source);
    let mut state_rx = store.subscribe();

    if !cli.json {
        println!("filmoteca (type 'help' for commands)");
    }
    print_state(&state_rx.borrow_and_update(), cli.json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_state(&state_rx.borrow_and_update(), cli.json)?;
            }
            line = lines.next_line() => {
                match line.context("reading stdin")? {
                    Some(line) => {
                        if !handle_command(&store, line.trim()) {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

/// Map one input line onto the store's commands.
///
/// Returns `false` when the driver should exit.
fn handle_command(store: &MovieCatalogStore, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "search" => store.on_search_query_changed(rest),
        "genre" => store.on_genre_selected(rest),
        "fav" => match rest.parse::<u32>() {
            Ok(movie_id) => store.on_toggle_favorite(movie_id),
            Err(_) => println!("usage: fav <movie id>"),
        },
        "retry" | "reload" => store.fetch_movies(),
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}' (try 'help')"),
    }

    true
}

fn print_state(state: &MovieScreenState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state).context("serializing state")?);
        return Ok(());
    }

    match state {
        MovieScreenState::Loading => println!("loading catalog..."),
        MovieScreenState::Error { message } => {
            println!("something went wrong: {message}");
            println!("type 'retry' to try again");
        }
        MovieScreenState::Success {
            displayed_movies,
            available_genres,
            search_query,
            selected_genre,
            favorite_movie_ids,
            ..
        } => {
            let chips: Vec<String> = available_genres
                .iter()
                .map(|genre| {
                    if genre == selected_genre {
                        format!("[{genre}]")
                    } else {
                        genre.clone()
                    }
                })
                .collect();
            println!();
            println!("genres: {}", chips.join(" "));
            if !search_query.is_empty() {
                println!("search: {search_query:?}");
            }
            if displayed_movies.is_empty() {
                println!("no movies match");
            }
            for movie in displayed_movies {
                let heart = if favorite_movie_ids.contains(&movie.id) {
                    '♥'
                } else {
                    ' '
                };
                println!(
                    "{heart} {:>2}  {} ({}, {:.1}) [{}]",
                    movie.id, movie.title, movie.release_year, movie.rating, movie.genre
                );
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  search <text>   filter titles by substring (case-insensitive)");
    println!("  genre <name>    filter by genre chip ('Todos' shows all)");
    println!("  fav <id>        toggle a movie in the favorites set");
    println!("  retry           re-fetch the catalog");
    println!("  quit            exit");
}
