use crate::statistics::{Measurement, Statistic};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use strum::IntoEnumIterator;

/// Values produced by one successful
/// [`StatisticsEngine::compute`](crate::statistics::StatisticsEngine::compute).
///
/// Every scalar is truncated to `precision` decimal digits. `modes` holds the
/// raw input values sharing the highest occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub precision: i32,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
    pub modes: Vec<f64>,
}

impl StatisticsResult {
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn median(&self) -> f64 {
        self.median
    }

    #[inline]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    #[inline]
    pub fn modes(&self) -> &[f64] {
        &self.modes
    }

    /// Scalar value for `statistic`, `None` for [`Statistic::Modes`].
    pub fn value_of(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::Sum => Some(self.sum),
            Statistic::Mean => Some(self.mean),
            Statistic::Median => Some(self.median),
            Statistic::StandardDeviation => Some(self.standard_deviation),
            Statistic::Modes => None,
        }
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        Statistic::iter()
            .filter_map(|s| self.value_of(s).map(|v| Measurement::new(s, v)))
            .collect()
    }
}

impl Display for StatisticsResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let digits = self.precision.max(0) as usize;
        write!(
            f,
            "n={}, sum={:.p$}, mean={:.p$}, median={:.p$}, sd={:.p$}, modes=[",
            self.count,
            self.sum,
            self.mean,
            self.median,
            self.standard_deviation,
            p = digits
        )?;
        for (i, m) in self.modes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{m}")?;
        }
        write!(f, "]")
    }
}
