use crate::lcg::LcgParams;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Inclusive bounds for generated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
	min: i64,
	max: i64,
}

impl ValueRange {
	pub fn new(min: i64, max: i64) -> Result<Self> {
		if min > max {
			bail!("invalid range: min value {min} is greater than max value {max}");
		}

		Ok(Self { min, max })
	}

	pub fn min(&self) -> i64 {
		self.min
	}

	pub fn max(&self) -> i64 {
		self.max
	}

	/// `max - min + 1` as unsigned. 0 means the range covers all of i64.
	pub fn span(&self) -> u64 {
		(self.max as u64).wrapping_sub(self.min as u64).wrapping_add(1)
	}

	/// Maps a generator state into the range
	#[inline]
	pub fn map(&self, state: u64) -> i64 {
		let offset = match self.span() {
			0 => state,
			span => state % span,
		};

		// offset <= max - min, so this lands in [min, max]
		self.min.wrapping_add(offset as i64)
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
	#[default]
	Kadane,
	/// Checks every subarray. Quadratic, only sensible for short sequences.
	BruteForce,
}

impl Algorithm {
	pub fn max_subarray(self, values: &[i64]) -> Result<i64> {
		match self {
			Algorithm::Kadane => kadane(values),
			Algorithm::BruteForce => brute_force(values),
		}
	}
}

/// Generates `n` values in `range`, starting from the state after `seed`.
pub fn generate(params: LcgParams, n: usize, seed: u64, range: ValueRange) -> Vec<i64> {
	params
		.states(seed)
		.take(n)
		.map(|state| range.map(state))
		.collect()
}

pub fn kadane(values: &[i64]) -> Result<i64> {
	let Some((&first, rest)) = values.split_first() else {
		bail!("empty sequence: no maximum subarray exists");
	};

	let mut max_sum = first;
	let mut current_sum = first;

	for &value in rest {
		if current_sum < 0 {
			current_sum = value;
		} else {
			current_sum = current_sum
				.checked_add(value)
				.context("subarray sum overflowed i64")?;
		}

		max_sum = max_sum.max(current_sum);
	}

	Ok(max_sum)
}

pub fn brute_force(values: &[i64]) -> Result<i64> {
	if values.is_empty() {
		bail!("empty sequence: no maximum subarray exists");
	}

	let mut max_sum = i64::MIN;

	for start in 0..values.len() {
		let mut current_sum: i64 = 0;

		for &value in &values[start..] {
			current_sum = current_sum
				.checked_add(value)
				.context("subarray sum overflowed i64")?;
			max_sum = max_sum.max(current_sum);
		}
	}

	Ok(max_sum)
}

/// Generates a sequence of `n` values and returns its maximum contiguous sum.
pub fn max_subarray_sum(
	params: LcgParams,
	algorithm: Algorithm,
	n: usize,
	seed: u64,
	range: ValueRange,
) -> Result<i64> {
	if n == 0 {
		bail!("empty sequence: sequence length must be at least 1");
	}

	let values = generate(params, n, seed, range);

	algorithm.max_subarray(&values)
}
