use anyhow::Result;
use strum::IntoEnumIterator;

use divergence_sniper::config::MacdPreset;
use divergence_sniper::domain::{Candle, PairInterval};
use divergence_sniper::utils::TimeUtils;
use divergence_sniper::{MacdTimeSeries, SeriesFile};

/// 2024-10-11 00:00 UTC
const START_MS: i64 = 1_728_604_800_000;
const DEMO_PAIR: &str = "EURUSD";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Higher timeframe drives the `any` primary, lower the secondary
    for (interval_ms, rows) in [(TimeUtils::MS_IN_4_H, 300), (TimeUtils::MS_IN_H, 600)] {
        let series = build_series(PairInterval::new(DEMO_PAIR, interval_ms), rows);
        let path = SeriesFile::default_path(&series.pair_interval, "json");
        SeriesFile::new(series).save_to_path(&path)?;
        println!("✅ Demo series written to {:?} ({} rows).", path, rows);
    }
    Ok(())
}

/// Sine-wave prices with a slow upward drift. Each preset gets a standard
/// MACD: fast EMA minus slow EMA of close, signal an EMA of that line.
fn build_series(pair_interval: PairInterval, rows: usize) -> MacdTimeSeries {
    let interval_ms = pair_interval.interval_ms;
    let closes: Vec<f64> = (0..rows)
        .map(|i| {
            let t = i as f64;
            1.08 + 0.00005 * t + 0.004 * (t / 9.0).sin() + 0.0015 * (t / 3.7).cos()
        })
        .collect();

    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let wick = 0.0004 + 0.0002 * ((i as f64) / 5.0).sin().abs();
            Candle::new(
                START_MS + i as i64 * interval_ms,
                open,
                open.max(close) + wick,
                open.min(close) - wick,
                close,
            )
        })
        .collect();

    MacdPreset::iter().fold(
        MacdTimeSeries::from_candles(pair_interval, &candles),
        |series, preset| {
            let (fast, slow, signal) = preset.periods();
            let line: Vec<f64> = ema(&closes, fast)
                .iter()
                .zip(ema(&closes, slow))
                .map(|(f, s)| f - s)
                .collect();
            let signal_line = ema(&line, signal);
            let columns = preset.columns();
            series
                .with_oscillator(columns.line, line)
                .with_oscillator(columns.signal, signal_line)
        },
    )
}

/// Exponential moving average with alpha = 2 / (period + 1), seeded with the first value.
fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period.max(1) as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => alpha * value + (1.0 - alpha) * p,
            None => value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}
