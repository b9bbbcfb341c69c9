use crate::{config::Config, solver};
use anyhow::{Context, Result};
use std::{
	fmt,
	time::{Duration, Instant},
};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
	/// The chained seed this run generated its sequence from
	pub seed: u64,
	pub max_sum: i64,
}

#[derive(Debug, Clone)]
pub struct Report {
	pub total: i64,
	pub runs: Vec<RunResult>,
	/// Wall clock time of the runs only
	pub elapsed: Duration,
}

/// Runs the benchmark. Each run advances the chained seed once and then lets the
/// solver generate its own sequence from it, so the two generator states never mix.
#[instrument(skip_all, fields(runs = config.runs, n = config.sequence_len))]
pub fn run(config: &Config) -> Result<Report> {
	let range = config.validate()?;
	let mut runs = Vec::with_capacity(config.runs);
	let mut total: i64 = 0;
	let mut seed = config.initial_seed;

	let start = Instant::now();
	for i in 0..config.runs {
		seed = config.lcg.next_state(seed);

		let max_sum = solver::max_subarray_sum(
			config.lcg,
			config.algorithm,
			config.sequence_len,
			seed,
			range,
		)
		.with_context(|| format!("run {i} (seed {seed})"))?;

		total = total
			.checked_add(max_sum)
			.context("total maximum subarray sum overflowed i64")?;

		debug!(run = i, seed, max_sum, "run finished");
		runs.push(RunResult { seed, max_sum });
	}
	let elapsed = start.elapsed();

	info!(total, elapsed = ?elapsed, "benchmark finished");

	Ok(Report {
		total,
		runs,
		elapsed,
	})
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"Total Maximum Subarray Sum ({} runs): {}",
			self.runs.len(),
			self.total
		)?;
		write!(f, "Execution Time: {:.6} seconds", self.elapsed.as_secs_f64())
	}
}
