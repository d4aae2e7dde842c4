use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// The measures reported by [`StatisticsEngine`](crate::statistics::StatisticsEngine).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Statistic {
    #[strum(message = "Sum", detailed_message = "Linear sum of all values.")]
    Sum,
    #[strum(
        message = "Mean",
        detailed_message = "Truncated sum divided by the number of values."
    )]
    Mean,
    #[strum(
        message = "Median",
        detailed_message = "Middle value, or the average of the two middle values."
    )]
    Median,
    #[strum(
        message = "Standard deviation",
        detailed_message = "Sample standard deviation (n - 1 denominator)."
    )]
    StandardDeviation,
    #[strum(
        message = "Modes",
        detailed_message = "Every value sharing the highest occurrence count."
    )]
    Modes,
}

impl Statistic {
    /// `false` for [`Statistic::Modes`], which may hold several values.
    #[inline]
    pub fn is_scalar(self) -> bool {
        !matches!(self, Statistic::Modes)
    }
}
