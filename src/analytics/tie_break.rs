//! Tie-break helpers
//!
//! Given a list already sorted by the caller, find how many leading entries
//! share the extreme value. Every query that returns "all winners" goes
//! through these helpers.

use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult};

/// Length of the leading run of items for which `same` holds pairwise.
fn equal_run_len<T>(items: &[T], same: impl Fn(&T, &T) -> bool) -> usize {
    if items.is_empty() {
        return 0;
    }
    let mut run = 1;
    for pair in items.windows(2) {
        if !same(&pair[0], &pair[1]) {
            break;
        }
        run += 1;
    }
    run
}

/// Number of leading `(item, count)` pairs sharing the top count.
///
/// `ranked` must be sorted by count, descending.
///
/// # Errors
/// - `DomainError::EmptyInput` if `ranked` is empty
pub fn top_count<T, C: PartialEq>(ranked: &[(T, C)]) -> DomainResult<usize> {
    if ranked.is_empty() {
        return Err(DomainError::EmptyInput("no ranked candidates"));
    }
    Ok(equal_run_len(ranked, |a, b| a.1 == b.1))
}

/// Prefix of `sorted` equal to its first element.
///
/// Works for ascending and descending input alike. Empty input yields an
/// empty prefix.
pub fn leading_equal_run<T: PartialEq>(sorted: &[T]) -> &[T] {
    &sorted[..equal_run_len(sorted, |a, b| a == b)]
}

/// Prefix of `sorted` whose `key` equals the key of the first element.
pub fn leading_equal_run_by<T, K, F>(sorted: &[T], key: F) -> &[T]
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    &sorted[..equal_run_len(sorted, |a, b| key(a) == key(b))]
}

/// Dynamically typed numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Decimal(Decimal),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Integer(_) => "integer",
            Scalar::Decimal(_) => "decimal",
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Scalar::Decimal(value)
    }
}

/// `leading_equal_run` over dynamically typed values.
///
/// # Errors
/// - `DomainError::TypeMismatch` if any element is of a different kind than
///   the first one
pub fn leading_equal_scalars(values: &[Scalar]) -> DomainResult<&[Scalar]> {
    let Some(first) = values.first() else {
        return Ok(values);
    };

    if let Some((index, odd)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| value.kind() != first.kind())
    {
        return Err(DomainError::TypeMismatch {
            index,
            expected: first.kind(),
            found: odd.kind(),
        });
    }

    Ok(leading_equal_run(values))
}
