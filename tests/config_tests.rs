use kline_signals::config::{parse_interval_ms, Config};
use kline_signals::divergence::{MAX_TIME_GAP_MINUTES, MIN_PRICE_CHANGE_PERCENT};

#[test]
fn parse_full_toml() {
    let toml_str = r#"
[data]
path = "data/klines_15m.json"
symbol = "BTCUSDT"
kline_interval = "15m"

[divergence]
max_time_gap_minutes = 45.0
min_price_change_percent = 0.2

[report]
utc_offset_hours = 8
recent_indicator_rows = 10

[logging]
level = "debug"
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.data.symbol, "BTCUSDT");
    assert_eq!(config.data.path.to_str(), Some("data/klines_15m.json"));
    assert_eq!(config.data.kline_interval_ms().unwrap(), 900_000);
    assert!((config.divergence.max_time_gap_minutes - 45.0).abs() < f64::EPSILON);
    assert!((config.divergence.min_price_change_percent - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.report.utc_offset_hours, 8);
    assert_eq!(config.report.recent_indicator_rows, 10);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn optional_sections_fall_back_to_defaults() {
    let toml_str = r#"
[data]
path = "klines.json"
symbol = "ETHUSDT"
kline_interval = "1m"

[divergence]
min_price_change_percent = 0.5
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert!((config.divergence.max_time_gap_minutes - MAX_TIME_GAP_MINUTES).abs() < f64::EPSILON);
    assert!((config.divergence.min_price_change_percent - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.report.utc_offset_hours, 0);
    assert_eq!(config.report.recent_indicator_rows, 5);
    assert_eq!(config.logging.level, "info");

    let bare = Config::from_toml_str(
        "[data]\npath = \"k.json\"\nsymbol = \"X\"\nkline_interval = \"1h\"\n",
    )
    .unwrap();
    assert!(
        (bare.divergence.min_price_change_percent - MIN_PRICE_CHANGE_PERCENT).abs() < f64::EPSILON
    );
}

#[test]
fn rejects_invalid_values() {
    let bad_interval = "[data]\npath = \"k.json\"\nsymbol = \"X\"\nkline_interval = \"15x\"\n";
    assert!(Config::from_toml_str(bad_interval).is_err());

    let bad_gap = "[data]\npath = \"k.json\"\nsymbol = \"X\"\nkline_interval = \"15m\"\n\n[divergence]\nmax_time_gap_minutes = 0.0\n";
    assert!(Config::from_toml_str(bad_gap).is_err());

    let bad_offset = "[data]\npath = \"k.json\"\nsymbol = \"X\"\nkline_interval = \"15m\"\n\n[report]\nutc_offset_hours = 20\n";
    assert!(Config::from_toml_str(bad_offset).is_err());

    assert!(Config::from_toml_str("[logging]\nlevel = \"info\"\n").is_err());
}

#[test]
fn parse_interval_covers_binance_units() {
    assert_eq!(parse_interval_ms("1s").unwrap(), 1_000);
    assert_eq!(parse_interval_ms("4h").unwrap(), 14_400_000);
    assert_eq!(parse_interval_ms("1d").unwrap(), 86_400_000);
    assert_eq!(parse_interval_ms("1w").unwrap(), 604_800_000);
    assert!(parse_interval_ms("99999999999999999999m").is_err());
}
