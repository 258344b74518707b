use crate::model::{EnrichedCandle, SignalKind, TradingSignal};

/// First index the scanner evaluates; earlier indicator values are too young.
pub const SCAN_START_INDEX: usize = 50;
/// Number of preceding candles inspected for the RSI extreme and the stop-loss.
pub const LOOKBACK_CANDLES: usize = 10;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Scan enriched candles from `SCAN_START_INDEX` onward and collect entry
/// signals in ascending time order.
pub fn scan_signals(candles: &[EnrichedCandle]) -> Vec<TradingSignal> {
    let mut signals = Vec::new();
    for index in SCAN_START_INDEX..candles.len() {
        for kind in [SignalKind::Long, SignalKind::Short] {
            if let Some(signal) = check_signal(candles, index, kind) {
                signals.push(signal);
            }
        }
    }

    tracing::debug!(
        candles = candles.len(),
        signals = signals.len(),
        "Signal scan finished"
    );
    signals
}

/// Evaluate the entry rule for `kind` at `index`.
///
/// Long: MACD crossed up at `index`, some RSI14 below 30 in the preceding
/// candles, and their lowest low sits below the current close (stop-loss).
/// Short mirrors it with a downward cross, RSI14 above 70 and the highest high.
pub fn check_signal(
    candles: &[EnrichedCandle],
    index: usize,
    kind: SignalKind,
) -> Option<TradingSignal> {
    if index < LOOKBACK_CANDLES || index >= candles.len() {
        return None;
    }

    let current = &candles[index];
    let crossed = match kind {
        SignalKind::Long => current.indicators.crossed_up,
        SignalKind::Short => current.indicators.crossed_down,
    };
    if !crossed {
        return None;
    }

    let window = &candles[index - LOOKBACK_CANDLES..index];
    let rsi_extreme = window
        .iter()
        .filter_map(|e| e.indicators.rsi14)
        .any(|rsi| match kind {
            SignalKind::Long => rsi < RSI_OVERSOLD,
            SignalKind::Short => rsi > RSI_OVERBOUGHT,
        });
    if !rsi_extreme {
        return None;
    }

    let entry = current.candle.close;
    let (stop_loss, risk_amount) = match kind {
        SignalKind::Long => {
            let lowest = window
                .iter()
                .map(|e| e.candle.low)
                .fold(f64::INFINITY, f64::min);
            (lowest, entry - lowest)
        }
        SignalKind::Short => {
            let highest = window
                .iter()
                .map(|e| e.candle.high)
                .fold(f64::NEG_INFINITY, f64::max);
            (highest, highest - entry)
        }
    };
    // Stop must sit strictly on the loss side of the entry.
    if risk_amount.is_nan() || risk_amount <= 0.0 {
        return None;
    }

    Some(TradingSignal {
        kind,
        time: current.candle.close_time,
        price: entry,
        stop_loss,
        rsi14: current.indicators.rsi14.unwrap_or(0.0),
        macd: current.indicators.macd.unwrap_or(0.0),
        macd_signal: current.indicators.macd_signal.unwrap_or(0.0),
        risk_amount,
        risk_percent: risk_amount / entry * 100.0,
    })
}
