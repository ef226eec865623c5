//! Token tables: ordered name → value-triple mappings.
//!
//! A [`Token`] is one CSS custom property with a value for each [`Variant`].
//! A [`TokenTable`] keeps tokens in the order they were added, which is the
//! order they are written to the stylesheet. Keeping that order stable keeps
//! diffs of the generated file readable.
//!
//! ```rust
//! use themegen_render::{TokenTable, Variant};
//!
//! let table = TokenTable::new()
//!     .add("link-color", ["#0066ee", "#22aaff", "#22aaff"])
//!     .add("nav-bg-color", ["#e7e7e7", "#050505", "#050505"]);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("link-color").unwrap().value(Variant::Dark), "#22aaff");
//! ```

use crate::variant::Variant;

/// A named custom property with one value per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    name: String,
    values: [String; 3],
}

impl Token {
    /// Creates a token from its values in `[light, dark, black]` order.
    pub fn new<V: Into<String>>(name: impl Into<String>, values: [V; 3]) -> Self {
        Self {
            name: name.into(),
            values: values.map(Into::into),
        }
    }

    /// Property name without the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self, variant: Variant) -> &str {
        &self.values[variant.index()]
    }

    /// All three values in `[light, dark, black]` order.
    pub fn values(&self) -> &[String; 3] {
        &self.values
    }
}

/// Tokens in declaration order.
///
/// Names are not checked for collisions; adding a name twice emits it twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    tokens: Vec<Token>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token, returning the table for chaining.
    pub fn add<V: Into<String>>(mut self, name: &str, values: [V; 3]) -> Self {
        self.push(Token::new(name, values));
        self
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// First token with the given name.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenTable {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
