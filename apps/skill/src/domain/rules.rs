use unicode_normalization::UnicodeNormalization;

/// Wrong guesses allowed before the game is lost.
pub const MAX_GUESSES: u32 = 8;
/// Synonyms revealed by the synonyms hint.
pub const MAX_SYNONYMS: usize = 3;

/// Tunable limits for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_guesses: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
        }
    }
}

impl GameRules {
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// True once `guess_count` wrong guesses exhaust the budget.
    pub fn is_exhausted(&self, guess_count: u32) -> bool {
        guess_count >= self.max_guesses
    }
}

/// Canonical form used for matching: trimmed, NFKC, lowercased, with
/// underscores read as spaces.
pub fn normalize_guess(text: &str) -> String {
    text.trim()
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .replace('_', " ")
}

/// Bidirectional containment: the secret contains the guess or the guess
/// contains the secret. "cat" therefore matches "cattle".
///
/// Callers must reject blank guesses first; an empty string is contained
/// in every secret.
pub fn guess_matches(secret: &str, guess: &str) -> bool {
    let secret = normalize_guess(secret);
    let guess = normalize_guess(guess);
    secret.contains(&guess) || guess.contains(&secret)
}
