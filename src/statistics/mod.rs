mod engine;
mod error;
mod measurement;
mod statistic;
mod summary;

pub use engine::{DEFAULT_PRECISION, StatisticsEngine};
pub use error::StatisticsError;
pub use measurement::Measurement;
pub use statistic::Statistic;
pub use summary::StatisticsResult;
