use marketcalc_wasm::domain::tickers::{
    AutocompleteModel, DropdownState, Symbol, TickerStore,
};

fn store(symbols: &[&str]) -> Vec<Symbol> {
    symbols.iter().map(|s| Symbol::from(*s)).collect()
}

#[test]
fn nonempty_matches_open_the_dropdown() {
    let store = store(&["AAPL", "AMZN", "GOOGL", "MSFT"]);
    let mut model = AutocompleteModel::new();

    model.on_query("A", &store);

    assert_eq!(model.state(), DropdownState::Open);
    assert_eq!(model.suggestions(), &[Symbol::from("AAPL"), Symbol::from("AMZN")]);
}

#[test]
fn clearing_the_query_closes_the_dropdown() {
    let store = store(&["AAPL"]);
    let mut model = AutocompleteModel::new();

    model.on_query("A", &store);
    assert_eq!(model.state(), DropdownState::Open);

    model.on_query("", &store);
    assert_eq!(model.state(), DropdownState::Closed);
    assert!(model.suggestions().is_empty());
}

#[test]
fn selecting_commits_the_symbol_and_closes() {
    let store = store(&["AAPL", "AMZN"]);
    let mut model = AutocompleteModel::new();

    model.on_query("A", &store);
    let committed = model.select(&Symbol::from("AMZN"));

    assert_eq!(committed, Symbol::from("AMZN"));
    assert_eq!(model.query(), "AMZN");
    assert_eq!(model.state(), DropdownState::Closed);
    assert!(model.suggestions().is_empty());
}

#[test]
fn outside_interaction_dismisses_regardless_of_query() {
    let store = store(&["AAPL"]);
    let mut model = AutocompleteModel::new();

    model.on_query("AAP", &store);
    assert_eq!(model.state(), DropdownState::Open);

    model.dismiss();
    assert_eq!(model.state(), DropdownState::Closed);
    assert!(model.suggestions().is_empty());
    // Dismissal keeps whatever the user typed
    assert_eq!(model.query(), "AAP");
}

#[test]
fn each_keystroke_replaces_the_suggestion_set_wholesale() {
    let store = store(&["AAPL", "AMZN", "GOOGL"]);
    let mut model = AutocompleteModel::new();

    model.on_query("A", &store);
    model.on_query("G", &store);

    assert_eq!(model.suggestions(), &[Symbol::from("GOOGL")]);
}

#[test]
fn pending_store_produces_no_suggestions() {
    // Keystrokes racing the catalog fetch see an empty store, not an error
    let pending = TickerStore::new();
    let mut model = AutocompleteModel::new();

    model.on_query("A", pending.symbols());

    assert_eq!(model.state(), DropdownState::Closed);
    assert!(model.suggestions().is_empty());
}
