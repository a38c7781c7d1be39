use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::EquityError;
use crate::simulator::TrialCounts;

/// Per-hand win percentages plus the shared tie percentage, each rounded to
/// two decimals. Rounded values are not renormalised, so their sum may miss
/// 100 by a rounding error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityResult {
    pub wins: Vec<f64>,
    pub tie: f64,
    pub trials: u64,
}

impl EquityResult {
    /// Win percentage for a 1-indexed hand number.
    pub fn win_percentage(&self, hand_number: usize) -> Option<f64> {
        hand_number
            .checked_sub(1)
            .and_then(|idx| self.wins.get(idx))
            .copied()
    }

    /// `Hand N Equity` keyed view used by the HTTP response.
    pub fn labelled_wins(&self) -> BTreeMap<String, f64> {
        self.wins
            .iter()
            .enumerate()
            .map(|(idx, pct)| (format!("Hand {} Equity", idx + 1), *pct))
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.wins.iter().sum::<f64>() + self.tie
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percentage(count: u64, trials: u64) -> f64 {
    round2(100.0 * count as f64 / trials as f64)
}

pub fn aggregate(counts: &TrialCounts) -> Result<EquityResult, EquityError> {
    if counts.trials == 0 {
        return Err(EquityError::InvalidTrialCount(0));
    }
    Ok(EquityResult {
        wins: counts
            .wins
            .iter()
            .map(|&wins| percentage(wins, counts.trials))
            .collect(),
        tie: percentage(counts.ties, counts.trials),
        trials: counts.trials,
    })
}
