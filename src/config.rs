//! Named defaults and settings shared by the CLI and the interactive modes

/// Zero-guess deviation minimizer of the embedded vocabulary
///
/// Re-derive with the `openers` command after changing `data/words_10.txt`.
pub const DEFAULT_OPENER: &str = "conditions";

/// Games per `simulate` run
pub const DEFAULT_GAMES: usize = 100;

/// Seed used by `simulate` when none is given
pub const DEFAULT_SEED: u64 = 42;

/// How the first guess is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenerChoice {
    /// Always open with this word
    Fixed(String),
    /// Rank the vocabulary at start-up and open with the best word
    Auto,
}

impl OpenerChoice {
    /// Parse a `--opener` value: "auto" or a word
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Fixed(name.to_lowercase())
        }
    }

    /// Default for a word list: the precomputed opener for the embedded words, computed
    /// otherwise
    #[must_use]
    pub fn default_for(embedded: bool) -> Self {
        if embedded {
            Self::Fixed(DEFAULT_OPENER.to_string())
        } else {
            Self::Auto
        }
    }
}

/// Which gamer plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamerKind {
    #[default]
    Partition,
    Random,
}

impl GamerKind {
    /// Create from name string
    ///
    /// Supported names: "partition", "random". Defaults to partition if name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Partition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_choice_parsing() {
        assert_eq!(OpenerChoice::from_name("auto"), OpenerChoice::Auto);
        assert_eq!(OpenerChoice::from_name("AUTO"), OpenerChoice::Auto);
        assert_eq!(
            OpenerChoice::from_name("Monitoring"),
            OpenerChoice::Fixed("monitoring".to_string())
        );
    }

    #[test]
    fn opener_default_depends_on_word_list() {
        assert_eq!(
            OpenerChoice::default_for(true),
            OpenerChoice::Fixed(DEFAULT_OPENER.to_string())
        );
        assert_eq!(OpenerChoice::default_for(false), OpenerChoice::Auto);
    }

    #[test]
    fn gamer_kind_parsing() {
        assert_eq!(GamerKind::from_name("random"), GamerKind::Random);
        assert_eq!(GamerKind::from_name("partition"), GamerKind::Partition);
        assert_eq!(GamerKind::from_name("unknown"), GamerKind::Partition);
    }
}
