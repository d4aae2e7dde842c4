use crate::config::EngineConfig;
use crate::statistics::{StatisticsError, StatisticsResult};
use crate::utils::math::truncate_to_precision;

pub const DEFAULT_PRECISION: i32 = 2;

/// Descriptive statistics over a batch of numbers, truncated to a fixed
/// number of decimal digits.
///
/// The engine keeps its own sorted copy of the last inputs; the caller's
/// slice is never touched. Each [`compute`](Self::compute) replaces the
/// previous result, nothing carries over between calls.
///
/// Not synchronized: share one engine across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    precision: i32,
    numbers: Vec<f64>,
    result: Option<StatisticsResult>,
}

impl StatisticsEngine {
    /// Any precision is accepted. Negative values truncate to the left of the
    /// decimal point, e.g. `-1` keeps multiples of ten.
    pub fn new(precision: i32) -> Self {
        Self {
            precision,
            numbers: Vec::new(),
            result: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.precision)
    }

    /// One-shot helper for callers that do not need to keep the engine.
    pub fn describe(precision: i32, inputs: &[f64]) -> Result<StatisticsResult, StatisticsError> {
        let mut engine = Self::new(precision);
        engine.compute(inputs).cloned()
    }

    #[inline]
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Result of the last successful [`compute`](Self::compute).
    #[inline]
    pub fn result(&self) -> Option<&StatisticsResult> {
        self.result.as_ref()
    }

    /// Sorted working copy of the inputs behind [`result`](Self::result).
    #[inline]
    pub fn sorted_inputs(&self) -> &[f64] {
        &self.numbers
    }

    pub fn compute(&mut self, inputs: &[f64]) -> Result<&StatisticsResult, StatisticsError> {
        self.numbers.clear();
        self.result = None;
        if inputs.is_empty() {
            return Err(StatisticsError::EmptyInput);
        }

        self.numbers.extend_from_slice(inputs);
        self.numbers.sort_by(f64::total_cmp);

        let sum = self.sum();
        let mean = self.mean(sum);
        let result = StatisticsResult {
            count: self.numbers.len(),
            precision: self.precision,
            sum,
            mean,
            median: self.median(),
            standard_deviation: self.standard_deviation(mean),
            modes: self.modes(),
        };

        Ok(self.result.insert(result))
    }

    #[inline]
    fn truncate(&self, x: f64) -> f64 {
        truncate_to_precision(x, self.precision)
    }

    fn sum(&self) -> f64 {
        self.truncate(self.numbers.iter().sum())
    }

    // Divides the already truncated sum, then truncates again.
    fn mean(&self, truncated_sum: f64) -> f64 {
        let mean = truncated_sum / self.numbers.len() as f64;
        self.truncate(mean)
    }

    fn median(&self) -> f64 {
        let n = self.numbers.len();
        let middle = n / 2;
        let median = if n % 2 == 0 {
            (self.numbers[middle] + self.numbers[middle - 1]) / 2.0
        } else {
            self.numbers[middle]
        };
        self.truncate(median)
    }

    // n == 1 divides by zero: +inf for a nonzero deviation, NaN otherwise.
    fn standard_deviation(&self, truncated_mean: f64) -> f64 {
        let squared: f64 = self
            .numbers
            .iter()
            .map(|x| libm::pow(x - truncated_mean, 2.0))
            .sum();
        let variance = squared / (self.numbers.len() - 1) as f64;
        self.truncate(libm::sqrt(variance))
    }

    // Runs of equal values are contiguous once sorted.
    fn modes(&self) -> Vec<f64> {
        let mut runs: Vec<(f64, usize)> = Vec::new();
        for &x in &self.numbers {
            match runs.last_mut() {
                Some((value, count)) if *value == x => *count += 1,
                _ => runs.push((x, 1)),
            }
        }

        let max_occurrence = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
        runs.into_iter()
            .filter(|&(_, c)| c == max_occurrence)
            .map(|(v, _)| v)
            .collect()
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
