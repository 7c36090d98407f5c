#![deny(clippy::all)]
#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

mod config;
mod corpus;
mod poem;
mod word_freq;

const DEFAULT_LOG_FILTER: &str = "write_poetry=info,probe_table=warn";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load();
    info!(corpus = %config.corpus.display(), order = ?config.order, "writing poem");

    let text = corpus::read_corpus(&config.corpus)?;
    let table = corpus::build_table(&text, config.order);

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    print!("{}", poem::compose(&table, &config, &mut rng)?);

    Ok(())
}
