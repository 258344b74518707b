use serde::Serialize;

use crate::divergence::{detect_divergences_with, DivergenceParams};
use crate::error::AnalysisError;
use crate::indicator::compute_indicators;
use crate::model::{
    Candle, DivergenceKind, DivergenceSignal, EnrichedCandle, SignalKind, TradingSignal,
};
use crate::scanner::scan_signals;

/// Output of one full run: enriched candles, entry signals, divergences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub candles: Vec<EnrichedCandle>,
    pub signals: Vec<TradingSignal>,
    pub divergences: Vec<DivergenceSignal>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub candles: usize,
    pub long_signals: usize,
    pub short_signals: usize,
    pub bullish_divergences: usize,
    pub bearish_divergences: usize,
}

impl AnalysisSummary {
    pub fn total_signals(&self) -> usize {
        self.long_signals + self.short_signals
    }

    pub fn total_divergences(&self) -> usize {
        self.bullish_divergences + self.bearish_divergences
    }
}

impl Analysis {
    pub fn summary(&self) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            candles: self.candles.len(),
            ..Default::default()
        };
        for signal in &self.signals {
            match signal.kind {
                SignalKind::Long => summary.long_signals += 1,
                SignalKind::Short => summary.short_signals += 1,
            }
        }
        for divergence in &self.divergences {
            match divergence.kind {
                DivergenceKind::Bullish => summary.bullish_divergences += 1,
                DivergenceKind::Bearish => summary.bearish_divergences += 1,
            }
        }
        summary
    }
}

pub fn analyze(candles: &[Candle]) -> Result<Analysis, AnalysisError> {
    analyze_with(candles, &DivergenceParams::default())
}

/// Run indicators, signal scan and divergence detection in sequence.
pub fn analyze_with(
    candles: &[Candle],
    params: &DivergenceParams,
) -> Result<Analysis, AnalysisError> {
    let enriched = compute_indicators(candles)?;
    let signals = scan_signals(&enriched);
    let divergences = detect_divergences_with(&signals, params);

    let analysis = Analysis {
        candles: enriched,
        signals,
        divergences,
    };
    let summary = analysis.summary();
    tracing::info!(
        candles = summary.candles,
        long = summary.long_signals,
        short = summary.short_signals,
        bullish = summary.bullish_divergences,
        bearish = summary.bearish_divergences,
        "Analysis finished"
    );
    Ok(analysis)
}
