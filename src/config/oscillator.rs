//! MACD parameter presets and the columns each one reads.

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::DivergenceError;

/// Named MACD parameterisations (fast-slow-signal periods).
/// The columns themselves are computed upstream; we only select them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MacdPreset {
    /// 3-6-2
    #[strum(to_string = "low2")]
    Low2,
    /// 6-13-5
    #[strum(to_string = "low1")]
    Low1,
    /// 12-26-9
    #[default]
    #[strum(to_string = "def")]
    Def,
    /// 48-104-36
    #[strum(to_string = "high")]
    High,
}

/// The oscillator line and its signal line for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdColumns {
    pub line: &'static str,
    pub signal: &'static str,
}

impl MacdPreset {
    /// Column Selector: the pre-agreed column identifiers for this preset.
    pub fn columns(self) -> MacdColumns {
        match self {
            Self::Low2 => MacdColumns {
                line: "macd_3_6_2",
                signal: "macdS_3_6_2",
            },
            Self::Low1 => MacdColumns {
                line: "macd_6_13_5",
                signal: "macdS_6_13_5",
            },
            Self::Def => MacdColumns {
                line: "macd_12_26_9",
                signal: "macdS_12_26_9",
            },
            Self::High => MacdColumns {
                line: "macd_48_104_36",
                signal: "macdS_48_104_36",
            },
        }
    }

    /// (fast, slow, signal) periods
    pub fn periods(self) -> (usize, usize, usize) {
        match self {
            Self::Low2 => (3, 6, 2),
            Self::Low1 => (6, 13, 5),
            Self::Def => (12, 26, 9),
            Self::High => (48, 104, 36),
        }
    }

    /// Comma-separated list of valid preset names, for error messages and CLI help.
    pub fn valid_names() -> String {
        Self::iter().map(|preset| format!("'{}'", preset)).join(", ")
    }
}

impl FromStr for MacdPreset {
    type Err = DivergenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|preset| preset.to_string() == s)
            .ok_or_else(|| DivergenceError::InvalidPreset {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
