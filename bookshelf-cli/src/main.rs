//! Bookshelf CLI - render the book listing from the command line

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a non-negative price
fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|_| format!("'{}' is not a valid price", s))?;
    if !price.is_finite() || price < 0.0 {
        Err("price must be a non-negative number".to_string())
    } else {
        Ok(price)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in book listing
    Render {
        /// Output format (html, text, json)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit an HTML fragment instead of a full document
        #[arg(long)]
        fragment: bool,
    },

    /// Render a single book card
    Card {
        /// Book title
        #[arg(long)]
        title: String,

        /// Author name
        #[arg(long)]
        author: String,

        /// Current price
        #[arg(long, value_parser = parse_price)]
        price: f64,

        /// Reference price shown on bestsellers (defaults to the price)
        #[arg(long, value_parser = parse_price)]
        original_price: Option<f64>,

        /// Genre label
        #[arg(long)]
        genre: String,

        /// Mark the book as not available
        #[arg(long)]
        unavailable: bool,

        /// Mark the book as a bestseller
        #[arg(long)]
        bestseller: bool,

        /// Output format (html, text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the built-in catalog records
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so rendered output stays clean.
    // The binary's events are targeted at `bookshelf::*`.
    let filter = if cli.verbose {
        "bookshelf=debug,bookshelf_core=debug"
    } else {
        "bookshelf=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render {
            format,
            output,
            fragment,
        } => commands::render(&format, output.as_deref(), fragment),

        Commands::Card {
            title,
            author,
            price,
            original_price,
            genre,
            unavailable,
            bestseller,
            format,
        } => {
            let book = bookshelf_core::BookRecord::new(title, author, price, genre)
                .with_original_price(original_price.unwrap_or(price))
                .available(!unavailable)
                .bestseller(bestseller);
            commands::card(&book, &format)
        }

        Commands::List { json } => commands::list(json),
    }
}
