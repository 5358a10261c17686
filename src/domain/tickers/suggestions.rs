use crate::domain::tickers::Symbol;

/// Hard cap on rendered suggestions per keystroke.
pub const MAX_SUGGESTIONS: usize = 10;

/// Case-insensitive prefix filter over the ticker store.
///
/// Pure function: normalizes the query to uppercase, returns nothing for an
/// empty query, otherwise the first [`MAX_SUGGESTIONS`] store entries whose
/// text starts with the query. Comparison is ordinal (byte-wise), store
/// order is preserved.
pub fn suggest(query: &str, store: &[Symbol]) -> Vec<Symbol> {
    let normalized = query.to_uppercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    store
        .iter()
        .filter(|symbol| symbol.value().starts_with(&normalized))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Dropdown visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Autocomplete state machine for one input field.
///
/// Holds the raw query and the currently visible suggestion set. Each
/// keystroke replaces the suggestion set wholesale - there is never a moment
/// where stale and fresh suggestions are both visible.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteModel {
    query: String,
    suggestions: Vec<Symbol>,
    state: DropdownState,
}

impl AutocompleteModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A keystroke happened: recompute suggestions against the store.
    /// Closed -> Open when matches exist, Open -> Closed when they don't.
    pub fn on_query(&mut self, raw: &str, store: &[Symbol]) {
        self.query = raw.to_string();
        self.suggestions = suggest(raw, store);
        self.state =
            if self.suggestions.is_empty() { DropdownState::Closed } else { DropdownState::Open };
    }

    /// Commit a clicked suggestion into the query and close the dropdown.
    pub fn select(&mut self, symbol: &Symbol) -> Symbol {
        self.query = symbol.value().to_string();
        self.suggestions.clear();
        self.state = DropdownState::Closed;
        symbol.clone()
    }

    /// Pointer interaction outside the input/suggestion region.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.state = DropdownState::Closed;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Symbol] {
        &self.suggestions
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }
}
