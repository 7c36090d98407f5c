use std::{fs, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use probe_table::ProbeTable;
use tracing::info;

use crate::word_freq::WordFreqInfo;

/// Number of preceding words that make up a chain state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Unigram,
    Bigram,
}

impl Order {
    pub const fn state_len(self) -> usize {
        match self {
            Self::Unigram => 1,
            Self::Bigram => 2,
        }
    }
}

pub fn state_key(words: &[String]) -> String {
    words.join("-")
}

pub fn read_corpus(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read corpus {}", path.display()))
}

/// Builds the follow statistics for every state in `text`.
///
/// Words are split on whitespace and lowercased.
pub fn build_table(text: &str, order: Order) -> ProbeTable<String, WordFreqInfo> {
    let mut table = ProbeTable::new();
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    let n = order.state_len();

    let Some(first) = words.get(..n) else {
        return table;
    };
    let key = state_key(first);
    table.insert(key.clone(), WordFreqInfo::new(key, 0));

    for window in words.windows(n + 1) {
        let (state, follower) = window.split_at(n);
        if let Some(info) = table.find_mut(state_key(state).as_str()) {
            info.update_follows(&follower[0]);
        }

        let next = state_key(&window[1..]);
        if !table.contains(next.as_str()) {
            table.insert(next.clone(), WordFreqInfo::new(next, 0));
        }
    }

    info!(
        words = words.len(),
        states = table.size(),
        capacity = table.capacity(),
        "built word table"
    );

    table
}
