use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::tickers::Symbol;

/// Load state of the static ticker catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// In-memory ordered ticker list, loaded once per page lifecycle.
///
/// Until `install` succeeds the store behaves as empty, so early keystrokes
/// racing the catalog fetch simply produce no suggestions instead of errors.
#[derive(Debug, Clone, Default)]
pub struct TickerStore {
    symbols: Vec<Symbol>,
    status: CatalogStatus,
}

impl TickerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded catalog. The list is immutable afterwards:
    /// a second install is ignored.
    pub fn install(&mut self, symbols: Vec<Symbol>) {
        if self.status == CatalogStatus::Ready {
            get_logger().warn(
                LogComponent::Domain("TickerStore"),
                "Ticker catalog already installed, ignoring reload",
            );
            return;
        }
        get_logger().info(
            LogComponent::Domain("TickerStore"),
            &format!("✅ Ticker catalog ready: {} symbols", symbols.len()),
        );
        self.symbols = symbols;
        self.status = CatalogStatus::Ready;
    }

    /// Degrade to a permanently empty store after a failed load.
    pub fn mark_failed(&mut self) {
        if self.status == CatalogStatus::Ready {
            return;
        }
        self.status = CatalogStatus::Failed;
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    /// Ordered symbol list; empty unless the catalog is ready.
    pub fn symbols(&self) -> &[Symbol] {
        match self.status {
            CatalogStatus::Ready => &self.symbols,
            _ => &[],
        }
    }
}
