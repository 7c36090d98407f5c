use probe_table::ProbeTable;
use rand::Rng;
use tracing::debug;

use crate::{
    config::Config,
    corpus::{state_key, Order},
    word_freq::WordFreqInfo,
};

#[derive(Debug, thiserror::Error)]
pub enum PoemError {
    #[error("start {0:?} never appears in the corpus")]
    UnknownStart(String),
    #[error("expected {expected} start word(s), got {got}")]
    StartLength { expected: usize, got: usize },
}

/// Walks the chain from `start`, picking `length` followers.
///
/// The walk ends early if it reaches a state nothing ever followed.
pub fn write_poem<R: Rng + ?Sized>(
    table: &ProbeTable<String, WordFreqInfo>,
    start: &[String],
    length: usize,
    order: Order,
    rng: &mut R,
) -> Result<String, PoemError> {
    if start.len() != order.state_len() {
        return Err(PoemError::StartLength {
            expected: order.state_len(),
            got: start.len(),
        });
    }

    let mut state: Vec<String> = start.iter().map(|w| w.to_lowercase()).collect();
    let start_key = state_key(&state);
    if !table.contains(start_key.as_str()) {
        return Err(PoemError::UnknownStart(start_key));
    }

    let mut poem = state.join(" ");
    poem.push(' ');

    for _ in 0..length {
        let key = state_key(&state);
        let Some(next) = table
            .find(key.as_str())
            .and_then(|info| info.pick_random(&mut *rng))
        else {
            debug!(state = %key, "no followers, ending poem early");
            break;
        };

        poem.push_str(next);
        poem.push(' ');
        if next == "." {
            poem.push('\n');
        }

        state.remove(0);
        state.push(next.to_string());
    }
    poem.push('.');

    Ok(poem)
}

/// The poem as printed, optionally preceded by the full table dump.
pub fn compose<R: Rng + ?Sized>(
    table: &ProbeTable<String, WordFreqInfo>,
    config: &Config,
    rng: &mut R,
) -> Result<String, PoemError> {
    let poem = write_poem(table, &config.start, config.length, config.order, rng)?;

    if config.print_table {
        Ok(format!("{table}\n{poem}\n\n"))
    } else {
        Ok(format!("{poem}\n\n"))
    }
}
