use crate::statistics::Statistic;
use std::fmt::{Display, Formatter, Result};

/// One scalar statistic taken from a [`StatisticsResult`](crate::statistics::StatisticsResult).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub statistic: Statistic,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new(statistic: Statistic, value: f64) -> Self {
        Self { statistic, value }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.statistic.into()
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}={}", self.name(), self.value)
    }
}
