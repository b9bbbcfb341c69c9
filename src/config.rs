use crate::{
	lcg::LcgParams,
	solver::{Algorithm, ValueRange},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	/// How many values each run generates
	pub sequence_len: usize,
	/// The seed the run seeds are chained from
	pub initial_seed: u64,
	/// Inclusive lower bound of generated values
	pub min_val: i64,
	/// Inclusive upper bound of generated values
	pub max_val: i64,
	/// How many runs are summed into the total
	pub runs: usize,
	pub algorithm: Algorithm,
	pub lcg: LcgParams,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			sequence_len: 10000,
			initial_seed: 42,
			min_val: -10,
			max_val: 10,
			runs: 20,
			algorithm: Algorithm::Kadane,
			lcg: LcgParams::default(),
		}
	}
}

impl Config {
	pub fn from_toml(s: &str) -> Result<Self> {
		Ok(toml::from_str(s)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("reading config file {}", path.display()))?;

		Self::from_toml(&contents).with_context(|| format!("parsing config file {}", path.display()))
	}

	/// Checks the preconditions of a benchmark run and returns the value range.
	pub fn validate(&self) -> Result<ValueRange> {
		if self.sequence_len == 0 {
			bail!("empty sequence: sequence_len must be at least 1");
		}
		if self.runs == 0 {
			bail!("no runs requested");
		}

		ValueRange::new(self.min_val, self.max_val)
	}
}
