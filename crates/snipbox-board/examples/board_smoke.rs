//! Smoke run of the board against a real file-backed store.
//!
//! Creates a couple of snippets in a data directory, reopens the store and
//! prints what a renderer would show for each filter.
//!
//! Usage:
//!   cargo run -p snipbox-board --example board_smoke -- [data-dir]
//!
//! Without an argument a temporary directory is used. Set `RUST_LOG=debug`
//! to see storage events.

use std::path::PathBuf;

use jiff::tz::TimeZone;
use snipbox_board::board::Board;
use snipbox_board::form::SnippetForm;
use snipbox_board::format::format_created_at;
use snipbox_core::models::category::{Category, CategoryFilter};
use snipbox_storage::config::StoreConfig;
use snipbox_storage::snippets::SnippetStore;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let tmp = tempfile::tempdir()?;
    let data_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| tmp.path().to_path_buf());

    let config = StoreConfig {
        data_dir: Some(data_dir),
        ..StoreConfig::default()
    };

    let mut board = Board::new(SnippetStore::open(&config)?);
    board.mount();

    for (title, category, code) in [
        ("Echo", Category::Php, "<?php echo 1;"),
        ("Reset", Category::Css, "* { margin: 0; }"),
    ] {
        let mut form = SnippetForm {
            title: title.to_string(),
            category,
            code: code.to_string(),
            ..SnippetForm::default()
        };
        board.submit(&mut form)?;
    }

    let mut board = Board::new(SnippetStore::open(&config)?);
    board.mount();
    println!("{} ({})", board.heading(), board.total_label());

    let tz = TimeZone::system();
    for filter in CategoryFilter::ALL {
        board.set_filter(filter);
        println!();
        println!("[{filter}] {} shown", board.counts().get(filter));
        match board.empty_state() {
            Some(empty) => println!("  {} {}", empty.title, empty.description),
            None => {
                for snippet in board.visible() {
                    println!(
                        "  {:<8} {:<6} {}",
                        snippet.title,
                        snippet.category.as_str(),
                        format_created_at(snippet, &tz)
                    );
                }
            }
        }
    }

    Ok(())
}
