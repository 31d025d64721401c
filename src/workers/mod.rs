pub mod card_processor;
pub mod live_fetcher;
pub mod market_scanner;

pub use card_processor::{CardBoard, CardProcessorWorker};
pub use live_fetcher::LiveFetcherWorker;
pub use market_scanner::MarketScannerWorker;
