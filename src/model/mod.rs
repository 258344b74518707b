pub mod candle;
pub mod signal;

pub use candle::{Candle, EnrichedCandle, IndicatorSnapshot};
pub use signal::{DivergenceKind, DivergenceSignal, SignalKind, TradingSignal};
