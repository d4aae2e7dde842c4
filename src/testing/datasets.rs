/// Eight values with sum 40, mean 5, median 4.5, single mode 4.
pub fn baseline() -> Vec<f64> {
    vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
}

pub fn two_way_tie() -> Vec<f64> {
    vec![1.0, 1.0, 2.0, 2.0, 3.0]
}

pub fn all_distinct() -> Vec<f64> {
    vec![1.0, 2.0, 3.0]
}

/// Unsorted, signed, with fractional digits past any small precision.
pub fn mixed() -> Vec<f64> {
    vec![3.14159, -2.71828, 1.41421, 0.57721, -1.61803, 3.14159, 10.5, -0.001]
}
