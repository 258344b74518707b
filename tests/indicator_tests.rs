use kline_signals::error::AnalysisError;
use kline_signals::indicator::{compute_indicators, MIN_CANDLES};
use kline_signals::model::Candle;

const MINUTE_MS: u64 = 60_000;

fn candle(i: usize, close: f64) -> Candle {
    let open_time = i as u64 * 15 * MINUTE_MS;
    Candle {
        open_time,
        open: close,
        high: close + 0.5,
        low: close - 0.5,
        close,
        volume: 10.0,
        close_time: open_time + 15 * MINUTE_MS - 1,
    }
}

fn wave(n: usize) -> Vec<Candle> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let close = 100.0
                + 8.0 * (x * std::f64::consts::TAU / 40.0).sin()
                + 3.0 * (x * std::f64::consts::TAU / 7.0).sin();
            candle(i, close)
        })
        .collect()
}

#[test]
fn short_series_reports_insufficient_data() {
    for n in 0..MIN_CANDLES {
        let candles: Vec<Candle> = (0..n).map(|i| candle(i, 100.0)).collect();
        assert_eq!(
            compute_indicators(&candles).unwrap_err(),
            AnalysisError::InsufficientData {
                required: 30,
                actual: n
            }
        );
    }
    assert!(compute_indicators(&wave(30)).is_ok());
}

#[test]
fn output_is_one_snapshot_per_candle() {
    let candles = wave(120);
    let enriched = compute_indicators(&candles).unwrap();
    assert_eq!(enriched.len(), candles.len());
    for (e, c) in enriched.iter().zip(&candles) {
        assert_eq!(&e.candle, c);
    }
    assert!(!enriched[0].indicators.crossed_up);
    assert!(!enriched[0].indicators.crossed_down);
}

#[test]
fn crossover_flags_are_exclusive_and_consistent() {
    let enriched = compute_indicators(&wave(400)).unwrap();
    let mut crossings = 0;
    for i in 1..enriched.len() {
        let snap = enriched[i].indicators;
        assert!(!(snap.crossed_up && snap.crossed_down), "index {}", i);
        if snap.crossed_up || snap.crossed_down {
            crossings += 1;
            let (macd_prev, signal_prev) = enriched[i - 1].indicators.macd_pair().unwrap();
            let (macd_now, signal_now) = snap.macd_pair().unwrap();
            if snap.crossed_up {
                assert!(macd_prev < signal_prev && macd_now > signal_now);
            } else {
                assert!(macd_prev > signal_prev && macd_now < signal_now);
            }
        }
    }
    assert!(crossings > 0, "a 40-candle cycle must cross repeatedly");
}

#[test]
fn rsi_stays_within_bounds() {
    let enriched = compute_indicators(&wave(200)).unwrap();
    for e in &enriched[14..] {
        let rsi = e.indicators.rsi14.unwrap();
        assert!((0.0..=100.0).contains(&rsi), "rsi {}", rsi);
    }
}

#[test]
fn flat_series_is_neutral() {
    let candles: Vec<Candle> = (0..60).map(|i| candle(i, 100.0)).collect();
    let enriched = compute_indicators(&candles).unwrap();
    for e in &enriched[14..] {
        assert!((e.indicators.rsi14.unwrap() - 50.0).abs() < 1e-9);
    }
    for e in &enriched[33..] {
        assert!(e.indicators.macd.unwrap().abs() < 1e-9);
        assert!(e.indicators.macd_signal.unwrap().abs() < 1e-9);
        assert!(e.indicators.macd_histogram.unwrap().abs() < 1e-9);
    }
    assert!(enriched
        .iter()
        .all(|e| !e.indicators.crossed_up && !e.indicators.crossed_down));
}

#[test]
fn rally_then_selloff_moves_rsi_to_extremes() {
    // accelerating rally keeps the MACD line clear of its signal line
    let mut closes: Vec<f64> = (0..40).map(|i| 100.0 + 0.05 * (i * i) as f64).collect();
    let peak = closes[39];
    closes.extend((0..40).map(|k| peak - 1.5 * (k + 1) as f64));
    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| candle(i, c))
        .collect();
    let enriched = compute_indicators(&candles).unwrap();

    assert!(enriched[39].indicators.rsi14.unwrap() > 70.0);
    assert!(enriched[39].indicators.macd.unwrap() > 0.0);
    assert!(enriched[79].indicators.rsi14.unwrap() < 30.0);
    assert!(enriched[79].indicators.macd.unwrap() < 0.0);

    let downs: Vec<usize> = enriched
        .iter()
        .enumerate()
        .filter(|(_, e)| e.indicators.crossed_down)
        .map(|(i, _)| i)
        .collect();
    assert!(!downs.is_empty());
    assert!(downs.iter().all(|&i| i >= 40), "death crosses at {:?}", downs);
    assert!(enriched[40..].iter().all(|e| !e.indicators.crossed_up));
}
