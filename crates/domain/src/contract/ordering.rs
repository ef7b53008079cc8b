//! Monotonicity checks for sorted columns.

/// Returns the index of the first element that breaks the requested order.
///
/// Ties are allowed. Incomparable neighbours count as a violation.
#[must_use]
pub fn first_order_violation<T: PartialOrd>(values: &[T], descending: bool) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| match pair[0].partial_cmp(&pair[1]) {
            Some(ordering) if descending => ordering.is_lt(),
            Some(ordering) => ordering.is_gt(),
            None => true,
        })
        .map(|i| i + 1)
}
