pub mod ema;
pub mod engine;
pub mod macd;
pub mod rsi;

pub use ema::Ema;
pub use engine::{
    compute_indicators, MACD_FAST_PERIOD, MACD_SIGNAL_PERIOD, MACD_SLOW_PERIOD, MIN_CANDLES,
    RSI_PERIOD,
};
pub use macd::{Macd, MacdPoint};
pub use rsi::Rsi;
