use crate::error::AnalysisError;
use crate::model::{Candle, EnrichedCandle, IndicatorSnapshot};

use super::macd::Macd;
use super::rsi::Rsi;

/// Fewer candles than this cannot produce a stable RSI14 / MACD(12,26,9).
pub const MIN_CANDLES: usize = 30;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// Enrich every candle with RSI14, MACD(12,26,9) and MACD crossover flags.
///
/// Output has the same length and order as `candles`.
pub fn compute_indicators(candles: &[Candle]) -> Result<Vec<EnrichedCandle>, AnalysisError> {
    if candles.len() < MIN_CANDLES {
        return Err(AnalysisError::InsufficientData {
            required: MIN_CANDLES,
            actual: candles.len(),
        });
    }

    let mut rsi = Rsi::new(RSI_PERIOD);
    let mut macd = Macd::new(MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD);

    let mut out: Vec<EnrichedCandle> = Vec::with_capacity(candles.len());
    for candle in candles {
        let point = macd.push(candle.close);
        let mut indicators = IndicatorSnapshot {
            rsi14: rsi.push(candle.close),
            macd: point.map(|p| p.macd),
            macd_signal: point.and_then(|p| p.signal),
            macd_histogram: point.and_then(|p| p.histogram()),
            crossed_up: false,
            crossed_down: false,
        };

        if let (Some((macd_prev, signal_prev)), Some((macd_now, signal_now))) = (
            out.last().and_then(|e| e.indicators.macd_pair()),
            indicators.macd_pair(),
        ) {
            indicators.crossed_up = macd_prev < signal_prev && macd_now > signal_now;
            indicators.crossed_down = macd_prev > signal_prev && macd_now < signal_now;
        }

        out.push(EnrichedCandle {
            candle: *candle,
            indicators,
        });
    }

    let crossings = out
        .iter()
        .filter(|e| e.indicators.crossed_up || e.indicators.crossed_down)
        .count();
    tracing::debug!(candles = out.len(), crossings, "Indicators computed");
    Ok(out)
}
