use itertools::iproduct;
use serde::Serialize;

use crate::analysis::divergence::check_divergence;
use crate::config::{ANALYSIS, MacdPreset};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_AGGREGATOR_CONDITIONS;
use crate::error::Result;
use crate::models::{Direction, DivergenceFlags, DivergenceKind, MacdTimeSeries};

/// Result of one (series, preset) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionOutcome {
    pub series_label: String,
    pub preset: MacdPreset,
    pub flags: DivergenceFlags,
    pub matched: bool,
}

/// Flag sets that count as a hit for `direction`: the regular divergence
/// alone, or together with the opposite side's hidden divergence.
pub fn acceptable_outcomes(direction: Direction) -> [DivergenceFlags; 2] {
    let regular = DivergenceKind::regular(direction);
    let hidden = DivergenceKind::hidden(direction.opposite());
    [
        DivergenceFlags::of(&[regular]),
        DivergenceFlags::of(&[regular, hidden]),
    ]
}

fn is_acceptable(flags: &DivergenceFlags, direction: Direction) -> bool {
    acceptable_outcomes(direction).contains(flags)
}

/// True when any of {primary, secondary} x {aggregator presets} shows the
/// expected divergence. Stops at the first hit.
pub fn any_divergence(
    primary: &MacdTimeSeries,
    secondary: &MacdTimeSeries,
    direction: Direction,
) -> Result<bool> {
    let settings = &ANALYSIS.aggregator;
    for (series, &preset) in iproduct!([primary, secondary], settings.presets.iter()) {
        let flags = check_divergence(series, direction, preset, settings.zone_limit)?;
        if is_acceptable(&flags, direction) {
            #[cfg(debug_assertions)]
            if PRINT_AGGREGATOR_CONDITIONS {
                log::info!(
                    "{} [{}]: {} matches {} setup",
                    series.pair_interval.short_label(),
                    preset,
                    flags,
                    direction
                );
            }
            return Ok(true);
        }
    }
    Ok(false)
}

/// Every combination evaluated, in the same order as [`any_divergence`].
pub fn evaluate_conditions(
    primary: &MacdTimeSeries,
    secondary: &MacdTimeSeries,
    direction: Direction,
) -> Result<Vec<ConditionOutcome>> {
    let settings = &ANALYSIS.aggregator;
    iproduct!([primary, secondary], settings.presets.iter())
        .map(|(series, &preset)| -> Result<ConditionOutcome> {
            let flags = check_divergence(series, direction, preset, settings.zone_limit)?;
            let outcome = ConditionOutcome {
                series_label: series.pair_interval.short_label(),
                preset,
                flags,
                matched: is_acceptable(&flags, direction),
            };

            #[cfg(debug_assertions)]
            if PRINT_AGGREGATOR_CONDITIONS {
                log::info!(
                    "   {:<14} {:<5} {}{}",
                    outcome.series_label,
                    outcome.preset.to_string(),
                    outcome.flags,
                    if outcome.matched { "  <- match" } else { "" }
                );
            }

            Ok(outcome)
        })
        .collect()
}

/// [`any_divergence`] first, then the per-combination report at debug level.
/// The report is best effort: a combination that cannot be evaluated is logged
/// and never turns an answer the short-circuit already found into an error.
pub fn any_divergence_reported(
    primary: &MacdTimeSeries,
    secondary: &MacdTimeSeries,
    direction: Direction,
) -> Result<bool> {
    let found = any_divergence(primary, secondary, direction)?;

    if log::log_enabled!(log::Level::Debug) {
        match evaluate_conditions(primary, secondary, direction) {
            Ok(report) => {
                for outcome in report {
                    log::debug!(
                        "{} [{}]: {}{}",
                        outcome.series_label,
                        outcome.preset,
                        outcome.flags,
                        if outcome.matched { " (match)" } else { "" }
                    );
                }
            }
            Err(e) => log::warn!("Per-combination report incomplete: {}", e),
        }
    }

    Ok(found)
}
