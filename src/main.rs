use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use divergence_sniper::domain::CandleType;
use divergence_sniper::utils::epoch_ms_to_utc;
use divergence_sniper::{
    Cli, Command, MacdTimeSeries, SeriesFile, any_divergence_reported, check_divergence, segment,
    segment_capped,
};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("divergence_sniper", log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Dispatch
    match args.command {
        Command::Any {
            primary,
            secondary,
            direction,
        } => {
            let primary = load_series(&primary)?;
            let secondary = load_series(&secondary)?;

            println!(
                "{}",
                any_divergence_reported(&primary, &secondary, direction)?
            );
        }

        Command::Check {
            series,
            direction,
            preset,
            zone_limit,
        } => {
            let series = load_series(&series)?;
            let flags = check_divergence(&series, direction, preset, zone_limit)?;
            println!("{}", flags);
        }

        Command::Ranges {
            series,
            preset,
            zone_limit,
        } => {
            let series = load_series(&series)?;
            let table = segment(&series, preset, zone_limit)?;
            if let Some(current) = table.most_recent() {
                log::info!(
                    "Current region: {:?}, rows [{}, {})",
                    current.sign,
                    current.start_idx,
                    current.end_idx
                );
            }
            println!(
                "{:>6}  {:>14}  {:>14}  {}",
                "region", "range_extreme", "macd_extreme", "extreme_time"
            );
            for row in table.summaries() {
                println!(
                    "{:>6}  {:>14.5}  {:>14.5}  {}",
                    row.region_index,
                    row.range_extreme,
                    row.oscillator_extreme,
                    epoch_ms_to_utc(row.extreme_time_ms)
                );
            }
        }

        Command::Extremes {
            series,
            preset,
            zone_limit,
            max_span,
        } => {
            let series = load_series(&series)?;
            let capped = segment_capped(&series, preset, zone_limit, max_span)?;
            let capped_regions = capped.regions.regions().iter().filter(|r| r.capped).count();
            println!(
                "{} regions ({} closed by the {}-row cap), {} extreme points",
                capped.regions.len(),
                capped_regions,
                max_span,
                capped.extremes.len()
            );
            for point in &capped.extremes {
                println!(
                    "{:<6}  {}  price {:.5}  macd {:.5}",
                    point.kind.to_string(),
                    epoch_ms_to_utc(point.time_ms),
                    point.price_extreme,
                    point.oscillator_extreme
                );
            }
        }
    }

    Ok(())
}

fn load_series(path: &Path) -> Result<MacdTimeSeries> {
    let file = SeriesFile::load_from_path(path)
        .with_context(|| format!("Failed to load series from {:?}", path))?;
    let series = file.series;

    if let Some(last) = series.last_candle() {
        let candle_type = match last.get_type() {
            CandleType::Bullish => "bullish",
            CandleType::Bearish => "bearish",
        };
        log::info!(
            "{}: {} rows, last candle {} closed {} at {:.5}",
            series.pair_interval.short_label(),
            series.klines(),
            epoch_ms_to_utc(last.timestamp_ms),
            candle_type,
            last.close_price
        );
    }

    Ok(series)
}
