use marketcalc_wasm::domain::tickers::{CatalogStatus, Symbol, TickerStore};

#[test]
fn pending_store_is_empty() {
    let store = TickerStore::new();
    assert_eq!(store.status(), CatalogStatus::Pending);
    assert!(store.symbols().is_empty());
}

#[test]
fn install_makes_the_catalog_visible() {
    let mut store = TickerStore::new();
    store.install(vec![Symbol::from("AAPL"), Symbol::from("MSFT")]);

    assert_eq!(store.status(), CatalogStatus::Ready);
    assert_eq!(store.symbols(), &[Symbol::from("AAPL"), Symbol::from("MSFT")]);
}

#[test]
fn second_install_is_ignored() {
    let mut store = TickerStore::new();
    store.install(vec![Symbol::from("AAPL")]);
    store.install(vec![Symbol::from("TSLA")]);

    assert_eq!(store.symbols(), &[Symbol::from("AAPL")]);
}

#[test]
fn failed_load_degrades_to_empty() {
    let mut store = TickerStore::new();
    store.mark_failed();

    assert_eq!(store.status(), CatalogStatus::Failed);
    assert!(store.symbols().is_empty());
}

#[test]
fn failure_after_success_does_not_drop_the_catalog() {
    let mut store = TickerStore::new();
    store.install(vec![Symbol::from("AAPL")]);
    store.mark_failed();

    assert_eq!(store.status(), CatalogStatus::Ready);
    assert_eq!(store.symbols(), &[Symbol::from("AAPL")]);
}
