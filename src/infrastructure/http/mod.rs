pub mod calc_api_client;
pub mod ticker_catalog;

pub use calc_api_client::CalcApiClient;
pub use ticker_catalog::TickerCatalogClient;
