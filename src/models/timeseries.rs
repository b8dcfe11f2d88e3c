use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{MacdColumns, MacdPreset};
use crate::domain::{Candle, PairInterval};
use crate::error::{DivergenceError, Result};

// ============================================================================
// MacdTimeSeries: price candles plus precomputed oscillator columns
// ============================================================================

/// Columnar input table: `time, open, high, low, close` plus any number of
/// named oscillator columns. Rows are ordered by time ascending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MacdTimeSeries {
    pub pair_interval: PairInterval,

    pub timestamps: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    // Oscillator columns keyed by identifier, e.g. "macd_12_26_9"
    #[serde(default)]
    pub oscillators: BTreeMap<String, Vec<f64>>,
}

/// The four fixed price columns every series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceColumn {
    Open,
    High,
    Low,
    Close,
}

impl PriceColumn {
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "open" => Some(Self::Open),
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Oscillator line and signal line resolved for one preset.
/// The signal line is carried through selection but not read by the analysis.
#[derive(Debug, Clone, Copy)]
pub struct OscillatorPair<'a> {
    pub columns: MacdColumns,
    pub line: &'a [f64],
    pub signal: &'a [f64],
}

impl MacdTimeSeries {
    pub fn from_candles(pair_interval: PairInterval, candles: &[Candle]) -> Self {
        let len = candles.len();
        let mut ts_vec = Vec::with_capacity(len);
        let mut open_vec = Vec::with_capacity(len);
        let mut high_vec = Vec::with_capacity(len);
        let mut low_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);

        for c in candles {
            ts_vec.push(c.timestamp_ms);
            open_vec.push(c.open_price);
            high_vec.push(c.high_price);
            low_vec.push(c.low_price);
            close_vec.push(c.close_price);
        }

        Self {
            pair_interval,
            timestamps: ts_vec,
            open_prices: open_vec,
            high_prices: high_vec,
            low_prices: low_vec,
            close_prices: close_vec,
            oscillators: BTreeMap::new(),
        }
    }

    /// Attach (or replace) a named oscillator column.
    pub fn with_oscillator(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.oscillators.insert(name.into(), values);
        self
    }

    pub fn klines(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
        )
    }

    pub fn last_candle(&self) -> Option<Candle> {
        self.klines()
            .checked_sub(1)
            .map(|last_idx| self.get_candle(last_idx))
    }

    pub fn price_column(&self, column: PriceColumn) -> &[f64] {
        match column {
            PriceColumn::Open => &self.open_prices,
            PriceColumn::High => &self.high_prices,
            PriceColumn::Low => &self.low_prices,
            PriceColumn::Close => &self.close_prices,
        }
    }

    /// Any column by name: one of the price columns or an oscillator identifier.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        if let Some(price) = PriceColumn::from_name(name) {
            return Ok(self.price_column(price));
        }
        self.oscillators
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| DivergenceError::MissingColumn(name.to_string()))
    }

    /// Column Selector: both columns of the preset must be present.
    pub fn oscillator_pair(&self, preset: MacdPreset) -> Result<OscillatorPair<'_>> {
        let columns = preset.columns();
        Ok(OscillatorPair {
            columns,
            line: self.column(columns.line)?,
            signal: self.column(columns.signal)?,
        })
    }

    /// Checks equal column lengths and strictly ascending timestamps.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DivergenceError::EmptySeries);
        }

        let len = self.klines();
        let price_lengths = [
            ("open", self.open_prices.len()),
            ("high", self.high_prices.len()),
            ("low", self.low_prices.len()),
            ("close", self.close_prices.len()),
        ];
        let oscillator_lengths = self
            .oscillators
            .iter()
            .map(|(name, values)| (name.as_str(), values.len()));

        for (name, column_len) in price_lengths.into_iter().chain(oscillator_lengths) {
            if column_len != len {
                return Err(DivergenceError::MalformedSeries(format!(
                    "column '{}' has {} rows but 'time' has {}",
                    name, column_len, len
                )));
            }
        }

        if let Some(pos) = self.timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DivergenceError::MalformedSeries(format!(
                "timestamps not strictly ascending at row {} ({} -> {})",
                pos + 1,
                self.timestamps[pos],
                self.timestamps[pos + 1]
            )));
        }

        Ok(())
    }
}
