use marketcalc_wasm::domain::tickers::{MAX_SUGGESTIONS, Symbol, suggest};

fn store(symbols: &[&str]) -> Vec<Symbol> {
    symbols.iter().map(|s| Symbol::from(*s)).collect()
}

#[test]
fn prefix_matches_preserve_store_order() {
    let store = store(&["AAPL", "AMZN", "GOOGL", "MSFT"]);
    let matches = suggest("A", &store);
    assert_eq!(matches, vec![Symbol::from("AAPL"), Symbol::from("AMZN")]);
}

#[test]
fn query_is_case_insensitive() {
    let store = store(&["AAPL", "AMZN", "GOOGL"]);
    assert_eq!(suggest("aa", &store), vec![Symbol::from("AAPL")]);
}

#[test]
fn empty_query_returns_nothing() {
    let store = store(&["AAPL", "AMZN"]);
    assert!(suggest("", &store).is_empty());
}

#[test]
fn results_are_capped() {
    let symbols: Vec<String> = (0..25).map(|i| format!("AA{:02}", i)).collect();
    let store: Vec<Symbol> = symbols.iter().map(|s| Symbol::from(s.as_str())).collect();
    let matches = suggest("AA", &store);
    assert_eq!(matches.len(), MAX_SUGGESTIONS);
    assert_eq!(matches[0], Symbol::from("AA00"));
    assert_eq!(matches[9], Symbol::from("AA09"));
}

#[test]
fn no_match_returns_nothing() {
    let store = store(&["AAPL", "AMZN"]);
    assert!(suggest("ZZZ", &store).is_empty());
}

#[test]
fn empty_store_is_safe_during_catalog_load() {
    assert!(suggest("A", &[]).is_empty());
}
