use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("cannot compute statistics of empty inputs")]
    EmptyInput,
}
