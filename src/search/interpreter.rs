//! Query Interpreter
//!
//! Rule-based keyword extraction. Each vocabulary is an ordered rule table; the first
//! rule (in declaration order) that accepts the lower-cased query wins, regardless of
//! where its token sits in the text.

use super::types::ExtractedCriteria;
use regex::Regex;
use std::sync::LazyLock;

pub const KNOWN_COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "pink", "orange", "purple",
];

pub const KNOWN_ITEM_TYPES: &[&str] = &[
    "shirt", "jeans", "jacket", "trousers", "sneakers", "hat", "skirt", "sweater", "blazer",
    "coat", "dress", "shorts",
];

// ASCII digits only; `\d` would also accept non-ASCII digits that `f64` cannot parse.
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("price pattern is valid"));

/// Decides whether a rule's token applies to a (lower-cased) query.
pub type Matcher = fn(query: &str, token: &str) -> bool;

pub fn substring(query: &str, token: &str) -> bool {
    query.contains(token)
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub token: String,
    pub matcher: Matcher,
}

impl Rule {
    pub fn applies_to(&self, query: &str) -> bool {
        (self.matcher)(query, &self.token)
    }
}

/// Ordered list of `(token, matcher)` rules.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    rules: Vec<Rule>,
}

impl Vocabulary {
    /// Builds a substring-matching vocabulary, keeping the given order.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: tokens
                .into_iter()
                .map(|token| Rule {
                    token: token.into(),
                    matcher: substring,
                })
                .collect(),
        }
    }

    /// Token of the first declared rule that applies to `query`.
    pub fn first_match(&self, query: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(query))
            .map(|rule| rule.token.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.token.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// First number in the text, e.g. `"shorts around 49.99"` -> `49.99`.
///
/// Only the first numeric run is considered, whatever it stands for.
pub fn extract_price(text: &str) -> Option<f64> {
    PRICE_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    colors: Vocabulary,
    item_types: Vocabulary,
}

impl QueryInterpreter {
    pub fn new(colors: Vocabulary, item_types: Vocabulary) -> Self {
        Self { colors, item_types }
    }

    /// Extracts color, item type and target price. Never fails; every field may be absent.
    pub fn interpret(&self, query: &str) -> ExtractedCriteria {
        let lower = query.to_lowercase();

        ExtractedCriteria {
            color: self.colors.first_match(&lower).map(str::to_string),
            item_type: self.item_types.first_match(&lower).map(str::to_string),
            target_price: extract_price(&lower),
        }
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new(
            Vocabulary::new(KNOWN_COLORS.iter().copied()),
            Vocabulary::new(KNOWN_ITEM_TYPES.iter().copied()),
        )
    }
}

/// Interprets `query` with the default vocabularies.
pub fn interpret(query: &str) -> ExtractedCriteria {
    QueryInterpreter::default().interpret(query)
}
