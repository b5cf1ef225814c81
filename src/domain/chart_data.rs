use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{DashboardError, Result};

/// Which of the fixed chart datasets the range selector shows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum ChartRange {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

/// Labels and values of equal length, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDataset {
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

const DAILY: ChartDataset = ChartDataset {
    labels: &["9AM", "12PM", "3PM", "6PM", "9PM"],
    values: &[500.0, 1200.0, 900.0, 1500.0, 2000.0],
};

const WEEKLY: ChartDataset = ChartDataset {
    labels: &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    values: &[12000.0, 19000.0, 3000.0, 5000.0, 2000.0, 30000.0, 45000.0],
};

const MONTHLY: ChartDataset = ChartDataset {
    labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
    values: &[45000.0, 52000.0, 48000.0, 61000.0],
};

impl ChartRange {
    pub fn dataset(self) -> &'static ChartDataset {
        match self {
            Self::Daily => &DAILY,
            Self::Weekly => &WEEKLY,
            Self::Monthly => &MONTHLY,
        }
    }

    /// Parses a selector value such as `"Daily"`.
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| DashboardError::UnknownChartRange(name.to_owned()))
    }
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_datasets_are_consistent() {
        for range in ChartRange::iter() {
            let ds = range.dataset();
            assert_eq!(ds.labels.len(), ds.values.len(), "{}", range);
            assert!(!ds.is_empty());
        }
    }

    #[test]
    fn test_default_is_weekly() {
        assert_eq!(ChartRange::default(), ChartRange::Weekly);
        assert_eq!(ChartRange::default().dataset().len(), 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ChartRange::parse("Daily"), Ok(ChartRange::Daily));
        assert_eq!(ChartRange::parse("Monthly"), Ok(ChartRange::Monthly));
        assert_eq!(
            ChartRange::parse("Yearly"),
            Err(DashboardError::UnknownChartRange("Yearly".to_string()))
        );
    }

    #[test]
    fn test_max_value() {
        assert_eq!(ChartRange::Daily.dataset().max_value(), 2000.0);
        assert_eq!(ChartRange::Monthly.dataset().max_value(), 61000.0);
    }
}
