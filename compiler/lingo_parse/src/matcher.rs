//! Word classification.
//!
//! A bare word (anything the lexer reports as [`TokenKind::Word`]) gets its
//! node kind from an ordered chain of matchers; the first one to claim the
//! word wins. Hosts prepend their own matchers so they see words before the
//! built-in ones do.
//!
//! [`TokenKind::Word`]: crate::TokenKind::Word

use lingo_ir::{Name, SymbolTable};

use crate::MatcherError;

/// Classifies a bare word as a node kind.
pub trait TokenMatcher {
    /// Unique identifier within a chain.
    fn id(&self) -> &str;

    /// The node kind for `word`, or `None` to let the next matcher try.
    fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name>;
}

/// Words spelled like a hooked label: function and macro names.
pub struct HookedMatcher;

impl TokenMatcher for HookedMatcher {
    fn id(&self) -> &str {
        "hooked"
    }

    fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name> {
        symbols.hooked(word)
    }
}

/// `:name` words.
pub struct KeywordMatcher;

impl TokenMatcher for KeywordMatcher {
    fn id(&self) -> &str {
        "keyword"
    }

    fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name> {
        word.starts_with(':').then(|| symbols.labels().keyword)
    }
}

/// Integer and float literals.
pub struct NumberMatcher;

impl TokenMatcher for NumberMatcher {
    fn id(&self) -> &str {
        "number"
    }

    fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name> {
        let labels = symbols.labels();
        if word.parse::<i64>().is_ok() {
            return Some(labels.int);
        }
        // `f64` also accepts `inf` and `nan`; require a leading digit.
        let digit_led = word.trim_start_matches(['+', '-']).starts_with(|c: char| c.is_ascii_digit());
        (digit_led && word.parse::<f64>().is_ok()).then_some(labels.float)
    }
}

/// Fallback: every word is an identifier.
pub struct IdentifierMatcher;

impl TokenMatcher for IdentifierMatcher {
    fn id(&self) -> &str {
        "identifier"
    }

    fn classify(&self, _word: &str, symbols: &SymbolTable) -> Option<Name> {
        Some(symbols.labels().identifier)
    }
}

/// Ordered matcher chain.
pub struct MatcherChain {
    matchers: Vec<Box<dyn TokenMatcher>>,
}

impl MatcherChain {
    /// The built-in chain: hooked, keyword, number, identifier.
    pub fn new() -> Self {
        MatcherChain {
            matchers: vec![
                Box::new(HookedMatcher),
                Box::new(KeywordMatcher),
                Box::new(NumberMatcher),
                Box::new(IdentifierMatcher),
            ],
        }
    }

    /// Put `matcher` in front of every registered matcher.
    pub fn hook(&mut self, matcher: Box<dyn TokenMatcher>) -> Result<(), MatcherError> {
        if self.matchers.iter().any(|m| m.id() == matcher.id()) {
            return Err(MatcherError::Duplicate(matcher.id().to_owned()));
        }
        tracing::debug!(id = matcher.id(), "hooked token matcher");
        self.matchers.insert(0, matcher);
        Ok(())
    }

    /// First classification of `word` along the chain.
    pub fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.classify(word, symbols))
    }

    /// Matcher ids in chain order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.id())
    }
}

impl Default for MatcherChain {
    fn default() -> Self {
        Self::new()
    }
}
