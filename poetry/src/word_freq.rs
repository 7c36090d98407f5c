use std::fmt::{self, Display};

use rand::Rng;

/// How often `follow` was seen right after the owning word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Freq {
    pub follow: String,
    pub count: usize,
}

impl Display for Freq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ", self.follow, self.count)
    }
}

/// Follower statistics for a single chain state.
#[derive(Clone, Debug)]
pub struct WordFreqInfo {
    pub word: String,
    /// Total number of recorded followers
    pub occurrences: usize,
    pub follows: Vec<Freq>,
}

impl WordFreqInfo {
    pub fn new(word: impl Into<String>, occurrences: usize) -> Self {
        Self {
            word: word.into(),
            occurrences,
            follows: Vec::new(),
        }
    }

    /// Records one more occurrence of `follow` after this word.
    pub fn update_follows(&mut self, follow: &str) {
        self.occurrences += 1;

        if let Some(freq) = self.follows.iter_mut().find(|f| f.follow == follow) {
            freq.count += 1;
        } else {
            self.follows.push(Freq {
                follow: follow.to_string(),
                count: 1,
            });
        }
    }

    /// Maps a draw in `0..occurrences` onto a follower, weighted by count.
    pub fn pick_next(&self, mut draw: usize) -> Option<&str> {
        for freq in &self.follows {
            if draw < freq.count {
                return Some(&freq.follow);
            }
            draw -= freq.count;
        }

        None
    }

    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.occurrences == 0 {
            return None;
        }

        self.pick_next(rng.gen_range(0..self.occurrences))
    }
}

impl Display for WordFreqInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word :{}: ({}) : ", self.word, self.occurrences)?;
        for freq in &self.follows {
            write!(f, "{freq}")?;
        }

        Ok(())
    }
}
