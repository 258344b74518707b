use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::AppError;
use crate::model::Candle;

/// Parse a Binance `/api/v3/klines` style payload:
/// `[[openTime, "open", "high", "low", "close", "volume", closeTime, ...], ...]`.
///
/// Prices may be string-encoded or plain JSON numbers. Trailing fields after
/// the close time are ignored.
pub fn parse_klines_json(payload: &str) -> Result<Vec<Candle>, AppError> {
    let rows: Vec<Vec<Value>> = serde_json::from_str(payload)?;
    rows.iter()
        .enumerate()
        .map(|(row, fields)| parse_row(row, fields))
        .collect()
}

fn parse_row(row: usize, fields: &[Value]) -> Result<Candle, AppError> {
    if fields.len() < 7 {
        return Err(AppError::Kline {
            row,
            msg: format!("expected at least 7 fields, got {}", fields.len()),
        });
    }
    Ok(Candle {
        open_time: field_u64(row, "open time", &fields[0])?,
        open: field_f64(row, "open", &fields[1])?,
        high: field_f64(row, "high", &fields[2])?,
        low: field_f64(row, "low", &fields[3])?,
        close: field_f64(row, "close", &fields[4])?,
        volume: field_f64(row, "volume", &fields[5])?,
        close_time: field_u64(row, "close time", &fields[6])?,
    })
}

fn field_f64(row: usize, name: &str, value: &Value) -> Result<f64, AppError> {
    let parsed = match value {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| AppError::Kline {
        row,
        msg: format!("invalid {}: {}", name, value),
    })
}

fn field_u64(row: usize, name: &str, value: &Value) -> Result<u64, AppError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| AppError::Kline {
        row,
        msg: format!("invalid {}: {}", name, value),
    })
}

/// Sort ascending by open time and drop repeated open times, keeping the
/// first occurrence.
pub fn normalize(mut candles: Vec<Candle>) -> Vec<Candle> {
    let before = candles.len();
    candles.sort_by_key(|c| c.open_time);
    candles.dedup_by_key(|c| c.open_time);
    let dropped = before - candles.len();
    if dropped > 0 {
        tracing::warn!(dropped, "Dropped duplicate klines");
    }
    candles
}

/// Count consecutive pairs whose open times are not exactly `interval_ms` apart.
pub fn irregular_gaps(candles: &[Candle], interval_ms: u64) -> usize {
    candles
        .windows(2)
        .filter(|pair| pair[1].open_time.saturating_sub(pair[0].open_time) != interval_ms)
        .count()
}

/// Read, parse and normalize a kline JSON file.
pub fn load_klines(path: &Path) -> Result<Vec<Candle>> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let candles = parse_klines_json(&payload)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let candles = normalize(candles);
    tracing::info!(count = candles.len(), path = %path.display(), "Loaded klines");
    Ok(candles)
}
