pub mod measure;
pub mod standard_id;
pub mod target;

pub use measure::Measure;
pub use standard_id::StandardId;
pub use target::{CalculationTarget, GenericTrade, Trade, TradeInfo, TradeInfoBuilder};
