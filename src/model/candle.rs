use serde::{Deserialize, Serialize};

/// One OHLCV kline. Times are epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: u64,
}

/// Derived indicator values for a single candle.
///
/// Values are `None` while their indicator is still warming up: RSI14 before
/// index 14, the MACD line before index 25, signal and histogram before index 33.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub crossed_up: bool,
    pub crossed_down: bool,
}

impl IndicatorSnapshot {
    /// MACD line and signal line, when both are defined.
    pub fn macd_pair(&self) -> Option<(f64, f64)> {
        Some((self.macd?, self.macd_signal?))
    }
}

/// A candle paired with the indicators computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCandle {
    pub candle: Candle,
    pub indicators: IndicatorSnapshot,
}
