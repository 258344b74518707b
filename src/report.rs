use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::config::ReportConfig;
use crate::model::{DivergenceSignal, EnrichedCandle, TradingSignal};
use crate::pipeline::{Analysis, AnalysisSummary};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed display offset; out-of-range hours fall back to UTC.
pub fn display_offset(utc_offset_hours: i32) -> FixedOffset {
    FixedOffset::east_opt(utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
}

pub fn format_time(epoch_ms: u64, offset: FixedOffset) -> String {
    i64::try_from(epoch_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.with_timezone(&offset).format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| epoch_ms.to_string())
}

pub fn render_signal(signal: &TradingSignal, offset: FixedOffset) -> String {
    format!(
        "[{}] {} | price: {:.2} | stop: {:.2} | risk: {:.2} ({:.2}%) | RSI: {:.2} | MACD: {:.4}",
        signal.kind.as_str(),
        format_time(signal.time, offset),
        signal.price,
        signal.stop_loss,
        signal.risk_amount,
        signal.risk_percent,
        signal.rsi14,
        signal.macd,
    )
}

pub fn render_divergence(divergence: &DivergenceSignal, offset: FixedOffset) -> String {
    let first = &divergence.first;
    let second = &divergence.second;
    format!(
        "[{} divergence] {} | gap: {} min | price: {:.2} -> {:.2} ({:+.2}%) | RSI: {:.2} -> {:.2} ({:+.2}) | MACD: {:.4} -> {:.4} ({:+.4}) | stop: {:.2}",
        divergence.kind.as_str(),
        format_time(second.time, offset),
        divergence.time_gap_minutes,
        first.price,
        second.price,
        divergence.price_change_percent,
        first.rsi14,
        second.rsi14,
        divergence.rsi_change,
        first.macd,
        second.macd,
        divergence.macd_change,
        second.stop_loss,
    )
}

fn opt(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}

/// One line per candle for the last `rows` enriched candles.
pub fn render_recent_indicators(
    candles: &[EnrichedCandle],
    rows: usize,
    offset: FixedOffset,
) -> Vec<String> {
    let start = candles.len().saturating_sub(rows);
    candles[start..]
        .iter()
        .map(|e| {
            let cross = if e.indicators.crossed_up {
                " golden-cross"
            } else if e.indicators.crossed_down {
                " death-cross"
            } else {
                ""
            };
            format!(
                "{} | close: {:.2} | RSI: {} | MACD: {} | signal: {} | hist: {}{}",
                format_time(e.candle.close_time, offset),
                e.candle.close,
                opt(e.indicators.rsi14, 2),
                opt(e.indicators.macd, 4),
                opt(e.indicators.macd_signal, 4),
                opt(e.indicators.macd_histogram, 4),
                cross,
            )
        })
        .collect()
}

pub fn render_summary(summary: &AnalysisSummary) -> Vec<String> {
    vec![
        format!("candles: {}", summary.candles),
        format!(
            "signals: {} (long {}, short {})",
            summary.total_signals(),
            summary.long_signals,
            summary.short_signals
        ),
        format!(
            "divergences: {} (bullish {}, bearish {})",
            summary.total_divergences(),
            summary.bullish_divergences,
            summary.bearish_divergences
        ),
    ]
}

/// Full plain-text report for one analysis run.
pub fn render_report(
    analysis: &Analysis,
    symbol: &str,
    interval: &str,
    config: &ReportConfig,
) -> String {
    let offset = display_offset(config.utc_offset_hours);
    let mut lines = vec![format!("== {} {} ==", symbol, interval), String::new()];

    lines.push(format!(
        "-- last {} candles --",
        config.recent_indicator_rows.min(analysis.candles.len())
    ));
    lines.extend(render_recent_indicators(
        &analysis.candles,
        config.recent_indicator_rows,
        offset,
    ));
    lines.push(String::new());

    lines.push("-- signals --".to_string());
    if analysis.signals.is_empty() {
        lines.push("no signals".to_string());
    }
    lines.extend(analysis.signals.iter().map(|s| render_signal(s, offset)));
    lines.push(String::new());

    lines.push("-- divergences --".to_string());
    if analysis.divergences.is_empty() {
        lines.push("no divergences".to_string());
    }
    lines.extend(
        analysis
            .divergences
            .iter()
            .map(|d| render_divergence(d, offset)),
    );
    lines.push(String::new());

    lines.push("-- summary --".to_string());
    lines.extend(render_summary(&analysis.summary()));
    lines.join("\n")
}
