pub mod chart;
pub mod instrument;
pub mod market;
pub mod portfolio;
pub mod quant;
pub mod ws;

pub use chart::*;
pub use instrument::*;
pub use market::*;
pub use portfolio::*;
pub use quant::*;
pub use ws::*;
