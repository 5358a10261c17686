use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::tickers::{AutocompleteModel, DropdownState, Symbol, TickerStore};
use crate::infrastructure::http::TickerCatalogClient;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Reactive autocomplete for one ticker input.
///
/// Wraps the pure [`AutocompleteModel`] and [`TickerStore`] in Leptos
/// signals. Each panel creates its own controller - two panels on one page
/// cannot clobber each other's dropdown.
#[derive(Clone)]
pub struct AutocompleteController {
    panel: &'static str,
    model: Rc<RefCell<AutocompleteModel>>,
    store: Rc<RefCell<TickerStore>>,
    pub query: RwSignal<String>,
    pub suggestions: RwSignal<Vec<Symbol>>,
    pub dropdown: RwSignal<DropdownState>,
}

impl AutocompleteController {
    pub fn new(panel: &'static str) -> Self {
        Self {
            panel,
            model: Rc::new(RefCell::new(AutocompleteModel::new())),
            store: Rc::new(RefCell::new(TickerStore::new())),
            query: create_rw_signal(String::new()),
            suggestions: create_rw_signal(Vec::new()),
            dropdown: create_rw_signal(DropdownState::Closed),
        }
    }

    /// Controller whose input starts pre-filled (dropdown stays closed).
    pub fn with_query(panel: &'static str, initial: &str) -> Self {
        let controller = Self::new(panel);
        controller.query.set(initial.to_string());
        controller
    }

    /// Kick off the one-shot catalog fetch. A failed load degrades to an
    /// always-empty suggestion list; the user is never bothered about it.
    pub fn load_catalog(&self, resource_path: &str) {
        let client = TickerCatalogClient::new(resource_path);
        let store = Rc::clone(&self.store);
        let panel = self.panel;
        spawn_local(async move {
            match client.fetch().await {
                Ok(symbols) => store.borrow_mut().install(symbols),
                Err(e) => {
                    get_logger().warn(
                        LogComponent::Application(panel),
                        &format!("Ticker catalog unavailable, autocomplete disabled: {}", e),
                    );
                    store.borrow_mut().mark_failed();
                }
            }
        });
    }

    /// Keystroke handler: recompute the suggestion set wholesale.
    pub fn on_input(&self, raw: String) {
        {
            let mut model = self.model.borrow_mut();
            model.on_query(&raw, self.store.borrow().symbols());
        }
        self.publish(raw);
    }

    /// Suggestion clicked: commit it into the query and close.
    pub fn select(&self, symbol: &Symbol) {
        let committed = self.model.borrow_mut().select(symbol);
        self.publish(committed.value().to_string());
    }

    /// Pointer interaction outside the input: close without touching the query.
    pub fn dismiss(&self) {
        self.model.borrow_mut().dismiss();
        let query = self.query.get_untracked();
        self.publish(query);
    }

    fn publish(&self, query: String) {
        // Drop the model borrow before signal writes can re-enter the UI
        let (suggestions, state) = {
            let model = self.model.borrow();
            (model.suggestions().to_vec(), model.state())
        };
        self.query.set(query);
        self.suggestions.set(suggestions);
        self.dropdown.set(state);
    }
}
