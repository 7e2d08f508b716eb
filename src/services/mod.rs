pub mod market;
pub mod portfolio;
pub mod quant;

pub use market::{InstrumentCatalog, MarketSimulator};
