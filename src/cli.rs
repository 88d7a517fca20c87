//! CLI surface: the presentation layer stand-in.
//!
//! Each invocation forwards exactly one intent to the store (or one query
//! to the search client), renders the resulting snapshot as text, and
//! exits. Routes mirror the app pages: watch list, products, cart, movies.

use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::{SearchClient, SearchSession, SearchState};
use crate::config::Config;
use crate::products;
use crate::storage::{FileKv, KvStore};
use crate::store::cart::EntryKind;
use crate::store::Store;

#[derive(Parser)]
#[command(name = "streamlist", about = "Personal streaming watch list, cart, and movie search")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the watch list
    List,
    /// Add an item to the watch list
    Add {
        /// Item text (joined with spaces)
        text: Vec<String>,
    },
    /// Toggle an item's completed flag
    Done { id: String },
    /// Delete an item
    Rm { id: String },
    /// Replace an item's text
    Edit {
        id: String,
        /// New text (joined with spaces); empty input discards the edit
        text: Vec<String>,
    },
    /// Show the subscriptions and accessories catalog
    Products,
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Search the movie catalog
    Search {
        /// Free-text query
        query: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add a product from the catalog by id
    Add { product_id: String },
    /// Change an accessory's quantity
    Qty { id: String, qty: f64 },
    /// Remove an entry
    Rm { id: String },
    /// Empty the cart
    Clear,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    let root = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(FileKv::default_root);
    let mut store = Store::open(FileKv::new(root));

    match cli.command {
        Command::List => render_watch_list(&store),
        Command::Add { text } => {
            store.add_watch_item(&text.join(" "))?;
            render_watch_list(&store);
        }
        Command::Done { id } => {
            store.toggle_complete(&id)?;
            render_watch_list(&store);
        }
        Command::Rm { id } => {
            store.delete_watch_item(&id)?;
            render_watch_list(&store);
        }
        Command::Edit { id, text } => {
            store.begin_edit(&id)?;
            store.update_edit_draft(&id, &text.join(" "))?;
            store.commit_edit(&id)?;
            render_watch_list(&store);
        }
        Command::Products => render_products(),
        Command::Cart { action } => run_cart(&mut store, action)?,
        Command::Search { query } => run_search(&config, &query.join(" ")).await,
    }
    Ok(())
}

fn run_cart<K: KvStore>(store: &mut Store<K>, action: CartAction) -> anyhow::Result<()> {
    let now = Instant::now();
    match action {
        CartAction::Show => {}
        CartAction::Add { product_id } => match products::find(&product_id) {
            Some(product) => {
                store.add_to_cart(product, now)?;
            }
            None => println!("No product with id '{product_id}'. See `streamlist products`."),
        },
        CartAction::Qty { id, qty } => {
            store.update_qty(&id, qty, now)?;
        }
        CartAction::Rm { id } => {
            store.remove_from_cart(&id, now)?;
        }
        CartAction::Clear => {
            store.clear_cart(now)?;
        }
    }
    render_notices(store, now);
    render_cart(store);
    Ok(())
}

fn render_notices<K: KvStore>(store: &Store<K>, now: Instant) {
    if let Some(warning) = store.warning(now) {
        println!("! {warning}");
    }
    if let Some(confirmation) = store.confirmation(now) {
        println!("{confirmation}");
    }
}

fn render_watch_list<K: KvStore>(store: &Store<K>) {
    let list = store.watch_list();
    if list.is_empty() {
        println!("No items yet. Add your first one with `streamlist add`.");
        return;
    }
    for entry in &list.entries {
        let mark = if entry.is_completed { "x" } else { " " };
        println!("[{mark}] {}  ({})", entry.text, entry.id);
    }
}

fn render_products() {
    println!("You can only add one subscription at a time. Accessories can be added multiple times.");
    for product in products::listing() {
        println!(
            "{:<14} {}  {} - {}",
            product.id,
            format_money(product.price),
            product.service,
            product.service_info
        );
    }
}

fn render_cart<K: KvStore>(store: &Store<K>) {
    let cart = store.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for entry in &cart.entries {
        let kind = match entry.kind {
            EntryKind::Subscription => "Subscription",
            EntryKind::Accessory => "Accessory",
        };
        println!(
            "{:<14} {} x{:<3} {}  ({kind})",
            entry.id,
            format_money(entry.price),
            entry.qty,
            entry.service
        );
    }
    println!("Total: {} ({} items)", format_money(store.cart_total()), store.cart_count());
}

async fn run_search(config: &Config, query: &str) {
    let mut session = SearchSession::new();
    let credential = config.search.resolve_credential();
    let guidance = config.search.setup_guidance();

    if let Some(token) = session.submit(query, &credential, &guidance) {
        if let crate::config::CredentialStatus::Configured(key) = credential {
            println!("Loading results...");
            let client = SearchClient::new(config.search.clone());
            let outcome = client.search(query, &key).await;
            session.resolve(token, outcome);
        }
    }

    match session.state() {
        SearchState::Idle => println!("Nothing to search for. Try `streamlist search Batman`."),
        SearchState::Loading { .. } => {}
        SearchState::Error { message } => println!("Error: {message}"),
        SearchState::Success { query, results } => {
            if results.is_empty() {
                println!("No results found for \"{query}\". Try a different search.");
                return;
            }
            println!(
                "Showing {} result{} for \"{query}\"",
                results.len(),
                if results.len() == 1 { "" } else { "s" }
            );
            for movie in results {
                println!("{} ({})  rating {}", movie.title, movie.year_display(), movie.rating_display());
                if !movie.overview.is_empty() {
                    println!("    {}", movie.overview);
                }
                if let Some(poster) = &movie.poster_url {
                    println!("    poster: {poster}");
                }
            }
        }
    }
}

fn format_money(n: f64) -> String {
    format!("${n:.2}")
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(9.99), "$9.99");
        assert_eq!(format_money(10.0), "$10.00");
    }
}
