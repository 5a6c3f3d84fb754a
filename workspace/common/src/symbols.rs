use serde::{Deserialize, Serialize};

/// Symbols a fresh portfolio starts with
pub const DEFAULT_PORTFOLIO: [&str; 3] = ["AAPL", "GOOGL", "MSFT"];

/// Uppercase ticker symbol. Not validated against any exchange list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Trim and uppercase `raw`; `None` when nothing is left.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Symbol(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Uppercase text typed into a symbol field, keeping whitespace as typed.
pub fn uppercase_input(raw: &str) -> String {
    raw.to_uppercase()
}

/// Ordered set of symbols: insertion order, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        for raw in DEFAULT_PORTFOLIO {
            if let Some(symbol) = Symbol::normalize(raw) {
                set.insert(symbol);
            }
        }
        set
    }

    /// Append `symbol` unless already present. Returns whether it was added.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.contains(&symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Remove `symbol` if present. Returns whether anything changed.
    pub fn remove(&mut self, symbol: &Symbol) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        self.symbols.len() != before
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.symbols.iter().map(|s| s.to_string()).collect()
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolSet::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(raw: &str) -> Symbol {
        Symbol::normalize(raw).unwrap()
    }

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(sym("  aapl ").as_str(), "AAPL");
        assert_eq!(Symbol::normalize("   "), None);
        assert_eq!(Symbol::normalize(""), None);
    }

    #[test]
    fn test_uppercase_input_does_not_trim() {
        assert_eq!(uppercase_input(" tsla "), " TSLA ");
    }

    #[test]
    fn test_defaults() {
        let set = SymbolSet::with_defaults();
        assert_eq!(set.to_strings(), vec!["AAPL", "GOOGL", "MSFT"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = SymbolSet::with_defaults();
        assert!(!set.insert(sym("aapl")));
        assert_eq!(set.len(), 3);

        assert!(set.insert(sym("tsla")));
        assert_eq!(set.to_strings(), vec!["AAPL", "GOOGL", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set = SymbolSet::with_defaults();
        assert!(!set.remove(&sym("NVDA")));
        assert_eq!(set, SymbolSet::with_defaults());

        assert!(set.remove(&sym("GOOGL")));
        assert!(!set.remove(&sym("GOOGL")));
        assert_eq!(set.to_strings(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_from_iter_drops_duplicates() {
        let set: SymbolSet = ["a", "b", "A"].iter().filter_map(|s| Symbol::normalize(s)).collect();
        assert_eq!(set.to_strings(), vec!["A", "B"]);
    }
}
