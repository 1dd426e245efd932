use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// Holds a symbolic identifier
///
/// Two symbols are the same only if they were created by the same call to
/// [Symbol::new] (or cloned from it). Symbols that merely share a name are
/// distinct, thus substitution maps and compiled argument lists match by identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    id: u64,
    name: Arc<str>,
}

impl Symbol {
    /// Allocates a new (unique) symbol
    pub fn new(name: &str) -> Self {
        Symbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            name: Arc::from(name),
        }
    }

    /// Returns the name of the symbol
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Sorts symbols with the `leading` ones first (in the given order) and the others by name
pub fn sort_symbols(symbols: impl IntoIterator<Item = Symbol>, leading: &[Symbol]) -> Vec<Symbol> {
    let mut others: Vec<Symbol> = symbols.into_iter().filter(|s| !leading.contains(s)).collect();
    others.sort_by(|a, b| a.name().cmp(b.name()).then(a.id.cmp(&b.id)));
    others.dedup();
    let mut sorted = leading.to_vec();
    sorted.extend(others);
    sorted
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
