use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Long,
    Short,
}

impl SignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Long => "LONG",
            SignalKind::Short => "SHORT",
        }
    }
}

/// Entry signal emitted by the scanner for a single enriched candle.
///
/// The stop-loss always sits on the loss side of the entry price; the scanner
/// never builds a signal that would violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub kind: SignalKind,
    /// Close time of the triggering candle, epoch milliseconds.
    pub time: u64,
    pub price: f64,
    pub stop_loss: f64,
    pub rsi14: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub risk_amount: f64,
    pub risk_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DivergenceKind {
    /// Price fell while RSI and MACD rose.
    Bullish,
    /// Price rose while RSI and MACD fell.
    Bearish,
}

impl DivergenceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DivergenceKind::Bullish => "BULLISH",
            DivergenceKind::Bearish => "BEARISH",
        }
    }

    pub fn for_signal(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Long => DivergenceKind::Bullish,
            SignalKind::Short => DivergenceKind::Bearish,
        }
    }
}

/// Disagreement between price and momentum across two same-kind signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceSignal {
    pub kind: DivergenceKind,
    pub first: TradingSignal,
    /// The later signal, which triggered the divergence.
    pub second: TradingSignal,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub rsi_change: f64,
    pub macd_change: f64,
    pub time_gap_minutes: u64,
}
