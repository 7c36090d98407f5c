use std::path::PathBuf;

use clap::Parser;

use crate::corpus::Order;

/// Writes a poem by randomly walking the word-follow statistics of a corpus.
///
/// Every option can also be set through the environment or a `.env` file.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Text file to learn from
    #[arg(env = "POETRY_CORPUS")]
    pub corpus: PathBuf,

    /// First word(s) of the poem, one per chain state word
    #[arg(
        short,
        long,
        env = "POETRY_START",
        num_args = 1..,
        value_delimiter = ' ',
        required = true
    )]
    pub start: Vec<String>,

    /// Number of words to generate after the start words
    #[arg(short, long, env = "POETRY_LENGTH", default_value_t = 20)]
    pub length: usize,

    #[arg(long, env = "POETRY_ORDER", value_enum, default_value_t = Order::Unigram)]
    pub order: Order,

    /// Print the word table before the poem
    #[arg(long, env = "POETRY_PRINT_TABLE")]
    pub print_table: bool,

    /// Seed for reproducible poems
    #[arg(long, env = "POETRY_SEED")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Self {
        dotenv::dotenv().ok();

        Self::parse()
    }
}
