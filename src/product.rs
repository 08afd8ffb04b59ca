//! Product of every element except the one at each position.
//!
//! Products are checked. A product that leaves `i64` is reported as
//! [`Error::Overflow`] instead of wrapping.

use crate::error::{Error, Result};

fn mul(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or(Error::Overflow {
        operation: "product except self",
    })
}

/// Separate prefix and suffix product arrays.
///
/// Fails when any running prefix or suffix product overflows, even where
/// a zero later brings the answer back in range.
pub fn except_self_prefix_suffix(nums: &[i64]) -> Result<Vec<i64>> {
    let len = nums.len();
    let mut prefix = vec![1; len];
    let mut suffix = vec![1; len];
    for i in 1..len {
        prefix[i] = mul(prefix[i - 1], nums[i - 1])?;
    }
    for i in (0..len.saturating_sub(1)).rev() {
        suffix[i] = mul(suffix[i + 1], nums[i + 1])?;
    }
    prefix.into_iter().zip(suffix).map(|(p, s)| mul(p, s)).collect()
}

/// Prefix products written into the output, then folded with a running
/// suffix product; no storage beyond the output.
///
/// Overflows under the same conditions as [`except_self_prefix_suffix`].
pub fn except_self_constant_space(nums: &[i64]) -> Result<Vec<i64>> {
    let mut out = vec![1; nums.len()];
    for i in 1..nums.len() {
        out[i] = mul(out[i - 1], nums[i - 1])?;
    }
    let mut running = 1;
    for i in (0..nums.len()).rev() {
        out[i] = mul(out[i], running)?;
        if i > 0 {
            running = mul(running, nums[i])?;
        }
    }
    Ok(out)
}

/// Divide the total product by each element, with zeros handled apart.
///
/// The product of the nonzero values is kept in `i128`. Fails when that
/// product leaves `i128`, or when a quotient does not fit in `i64`.
pub fn except_self_division(nums: &[i64]) -> Result<Vec<i64>> {
    let overflow = || Error::Overflow {
        operation: "product except self",
    };
    let zeros = nums.iter().filter(|&&num| num == 0).count();
    let nonzero_product = nums
        .iter()
        .filter(|&&num| num != 0)
        .try_fold(1_i128, |product, &num| product.checked_mul(i128::from(num)))
        .ok_or_else(overflow)?;
    nums.iter()
        .map(|&num| {
            let answer = match (zeros, num) {
                (0, num) => nonzero_product / i128::from(num),
                (1, 0) => nonzero_product,
                _ => 0,
            };
            i64::try_from(answer).map_err(|_| overflow())
        })
        .collect()
}
