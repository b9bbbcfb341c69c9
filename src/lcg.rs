use serde::{Deserialize, Serialize};

/// Only the low 32 bits of the state survive each step
const STATE_MASK: u64 = 0xffff_ffff;

/// Multiplier and increment of the generator. The modulus is always 2^32.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LcgParams {
	pub multiplier: u64,
	pub increment: u64,
}

impl Default for LcgParams {
	// Numerical Recipes
	fn default() -> Self {
		Self {
			multiplier: 1664525,
			increment: 1013904223,
		}
	}
}

impl LcgParams {
	/// `(a * state + c) mod 2^32`. Wrapping in 64 bits first is exact since 2^32 divides 2^64.
	#[inline]
	pub fn next_state(&self, state: u64) -> u64 {
		state
			.wrapping_mul(self.multiplier)
			.wrapping_add(self.increment)
			& STATE_MASK
	}

	/// Iterator over the states following `seed`
	pub fn states(self, seed: u64) -> Lcg {
		Lcg {
			params: self,
			state: seed,
		}
	}
}

/// Advances `state` with the default parameters.
#[inline]
pub fn next_state(state: u64) -> u64 {
	LcgParams::default().next_state(state)
}

/// Endless stream of generator states. The seed itself is never yielded.
#[derive(Debug, Clone)]
pub struct Lcg {
	params: LcgParams,
	state: u64,
}

impl Lcg {
	pub fn new(seed: u64) -> Self {
		LcgParams::default().states(seed)
	}
}

impl Iterator for Lcg {
	type Item = u64;

	#[inline]
	fn next(&mut self) -> Option<u64> {
		self.state = self.params.next_state(self.state);
		Some(self.state)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(usize::MAX, None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_steps() {
		assert_eq!(next_state(0), 1013904223);
		assert_eq!(next_state(1), 1015568748);
		assert_eq!(next_state(42), 1083814273);
	}

	#[test]
	fn state_stays_within_32_bits() {
		for seed in [u64::MAX, u64::MAX - 1, 1 << 40, 0xdead_beef_cafe] {
			assert!(next_state(seed) <= STATE_MASK);
		}
		// the high bits of a wide seed do not matter
		assert_eq!(next_state(42 | (7 << 32)), next_state(42));
	}

	#[test]
	fn iterator_skips_seed() {
		let states: Vec<u64> = Lcg::new(42).take(3).collect();

		assert_eq!(states[0], next_state(42));
		assert_eq!(states[1], next_state(states[0]));
		assert_eq!(states[2], next_state(states[1]));
	}

	#[test]
	fn custom_params() {
		let params = LcgParams {
			multiplier: 1,
			increment: 1,
		};
		let states: Vec<u64> = params.states(STATE_MASK - 1).take(3).collect();

		assert_eq!(states, [STATE_MASK, 0, 1]);
	}
}
