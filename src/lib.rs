pub mod config;
pub mod statistics;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::EngineConfig;
pub use statistics::{StatisticsEngine, StatisticsError, StatisticsResult};
