use serde::Deserialize;

use crate::model::{DivergenceKind, DivergenceSignal, SignalKind, TradingSignal};

/// Signals further apart than this are never paired.
pub const MAX_TIME_GAP_MINUTES: f64 = 30.0;
/// Price moves smaller than this (in percent) are treated as noise.
pub const MIN_PRICE_CHANGE_PERCENT: f64 = 0.1;

const MS_PER_MINUTE: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DivergenceParams {
    #[serde(default = "default_max_time_gap_minutes")]
    pub max_time_gap_minutes: f64,
    #[serde(default = "default_min_price_change_percent")]
    pub min_price_change_percent: f64,
}

fn default_max_time_gap_minutes() -> f64 {
    MAX_TIME_GAP_MINUTES
}

fn default_min_price_change_percent() -> f64 {
    MIN_PRICE_CHANGE_PERCENT
}

impl Default for DivergenceParams {
    fn default() -> Self {
        Self {
            max_time_gap_minutes: MAX_TIME_GAP_MINUTES,
            min_price_change_percent: MIN_PRICE_CHANGE_PERCENT,
        }
    }
}

/// Detect divergences with the default 30 minute / 0.1% thresholds.
pub fn detect_divergences(signals: &[TradingSignal]) -> Vec<DivergenceSignal> {
    detect_divergences_with(signals, &DivergenceParams::default())
}

/// Pair each signal with the nearest earlier signal of the same kind whose
/// price moved one way while RSI and MACD both moved the other.
///
/// `signals` must already be in ascending time order. Each signal triggers at
/// most one divergence; the backward scan stops at the first match or as
/// soon as the time gap exceeds `max_time_gap_minutes`.
pub fn detect_divergences_with(
    signals: &[TradingSignal],
    params: &DivergenceParams,
) -> Vec<DivergenceSignal> {
    let mut divergences = Vec::new();

    for (i, curr) in signals.iter().enumerate().skip(1) {
        for prev in signals[..i].iter().rev() {
            if prev.kind != curr.kind || prev.time >= curr.time {
                continue;
            }

            let gap_minutes = (curr.time - prev.time) as f64 / MS_PER_MINUTE;
            if gap_minutes > params.max_time_gap_minutes {
                break;
            }

            let price_change = curr.price - prev.price;
            let price_change_percent = price_change / prev.price * 100.0;
            if price_change_percent.abs() < params.min_price_change_percent {
                continue;
            }

            let rsi_change = curr.rsi14 - prev.rsi14;
            let macd_change = curr.macd - prev.macd;
            let diverges = match curr.kind {
                SignalKind::Long => price_change < 0.0 && rsi_change > 0.0 && macd_change > 0.0,
                SignalKind::Short => price_change > 0.0 && rsi_change < 0.0 && macd_change < 0.0,
            };
            if !diverges {
                continue;
            }

            divergences.push(DivergenceSignal {
                kind: DivergenceKind::for_signal(curr.kind),
                first: prev.clone(),
                second: curr.clone(),
                price_change,
                price_change_percent,
                rsi_change,
                macd_change,
                time_gap_minutes: gap_minutes as u64,
            });
            break;
        }
    }

    tracing::debug!(
        signals = signals.len(),
        divergences = divergences.len(),
        "Divergence scan finished"
    );
    divergences
}
