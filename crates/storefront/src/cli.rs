use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Similar-item recommendations for a product catalog")]
pub struct Cli {
    /// Path to config.json (defaults to ~/.storefront/config.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show items similar to a product
    Recommend {
        /// Exact product name
        name: String,

        /// Catalog CSV or JSONL (defaults to ~/.storefront/models/clean_data.csv)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Number of items to return
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top_n: Option<i64>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List trending products
    Trending {
        /// Trending CSV or JSONL (defaults to ~/.storefront/models/trending_products.csv)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Rows to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog: size, vocabulary, duplicate names
    Inspect {
        #[arg(short, long)]
        catalog: Option<String>,
    },

    /// Write a catalog out as JSONL
    Export {
        #[arg(short, long)]
        catalog: Option<String>,

        /// Destination .jsonl file
        #[arg(short, long)]
        out: String,
    },

    /// Print version information
    Version,
}
