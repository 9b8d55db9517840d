//! Secret word selection
//!
//! An oracle picks the word the gamer has to find. The random source is injected so runs
//! can be reproduced from a seed.

use crate::core::{Vocabulary, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Picks the secret word for each game
pub trait Oracle {
    /// Display name used in reports
    fn name(&self) -> &str;

    /// Secret word for the next game, or `None` if nothing can be picked
    fn pick_word<'v>(&mut self, vocabulary: &'v Vocabulary) -> Option<&'v Word>;
}

/// Uniform random choice over the whole vocabulary
pub struct UniformOracle<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformOracle<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Oracle for UniformOracle<R> {
    fn name(&self) -> &str {
        "GameMaker-random-uniform"
    }

    fn pick_word<'v>(&mut self, vocabulary: &'v Vocabulary) -> Option<&'v Word> {
        vocabulary.words().choose(&mut self.rng)
    }
}

/// Replays a fixed list of secrets, wrapping around at the end
///
/// Words missing from the vocabulary are skipped.
#[derive(Debug, Clone)]
pub struct ScriptedOracle {
    script: Vec<String>,
    next: usize,
}

impl ScriptedOracle {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl Oracle for ScriptedOracle {
    fn name(&self) -> &str {
        "GameMaker-scripted"
    }

    fn pick_word<'v>(&mut self, vocabulary: &'v Vocabulary) -> Option<&'v Word> {
        for _ in 0..self.script.len() {
            let text = &self.script[self.next];
            self.next = (self.next + 1) % self.script.len();
            if let Some(word) = vocabulary.find(text) {
                return Some(word);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words(["abc", "abd", "xyz", "bcd"]).unwrap()
    }

    #[test]
    fn uniform_picks_vocabulary_words() {
        let vocabulary = vocabulary();
        let mut oracle = UniformOracle::new(StdRng::seed_from_u64(5));

        for _ in 0..50 {
            let word = oracle.pick_word(&vocabulary).unwrap();
            assert!(vocabulary.contains(word.text()));
        }
    }

    #[test]
    fn uniform_is_reproducible_with_seed() {
        let vocabulary = vocabulary();
        let mut a = UniformOracle::new(StdRng::seed_from_u64(9));
        let mut b = UniformOracle::new(StdRng::seed_from_u64(9));

        for _ in 0..10 {
            assert_eq!(a.pick_word(&vocabulary), b.pick_word(&vocabulary));
        }
    }

    #[test]
    fn uniform_eventually_covers_everything() {
        let vocabulary = vocabulary();
        let mut oracle = UniformOracle::new(StdRng::seed_from_u64(1));
        let mut seen = [false; 4];

        for _ in 0..200 {
            let word = oracle.pick_word(&vocabulary).unwrap();
            seen[vocabulary.index_of(word.text()).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_cycles_and_skips_unknown() {
        let vocabulary = vocabulary();
        let mut oracle = ScriptedOracle::new(["xyz", "nope", "abc"]);

        let picks: Vec<&str> = (0..4)
            .map(|_| oracle.pick_word(&vocabulary).unwrap().text())
            .collect();
        assert_eq!(picks, ["xyz", "abc", "xyz", "abc"]);
    }

    #[test]
    fn scripted_without_known_words() {
        let vocabulary = vocabulary();
        assert!(ScriptedOracle::new(["nope"]).pick_word(&vocabulary).is_none());
        assert!(
            ScriptedOracle::new(Vec::<String>::new())
                .pick_word(&vocabulary)
                .is_none()
        );
    }

    #[test]
    fn names() {
        assert_eq!(
            UniformOracle::new(StdRng::seed_from_u64(0)).name(),
            "GameMaker-random-uniform"
        );
        assert_eq!(ScriptedOracle::new(["abc"]).name(), "GameMaker-scripted");
    }
}
