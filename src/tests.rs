#[cfg(test)]
mod tests {
	use crate::{Config, run};

	/// Pinned total for n = 10000, seed 42, values in [-10, 10], 20 runs.
	const BASELINE_TOTAL: i64 = 10980;

	#[test]
	fn known_seed_regression() {
		let report = run(&Config::default()).unwrap();

		assert_eq!(report.runs.len(), 20);
		assert_eq!(report.total, BASELINE_TOTAL);
		for r in &report.runs {
			assert_eq!(r.max_sum, 549, "seed {}", r.seed);
		}

		let output = report.to_string();
		let mut lines = output.lines();
		assert_eq!(
			lines.next(),
			Some("Total Maximum Subarray Sum (20 runs): 10980")
		);
		let time_line = lines.next().unwrap();
		assert!(time_line.starts_with("Execution Time: "));
		assert!(time_line.ends_with(" seconds"));
		let secs = time_line
			.trim_start_matches("Execution Time: ")
			.trim_end_matches(" seconds");
		assert_eq!(secs.split('.').nth(1).map(str::len), Some(6));
		assert_eq!(lines.next(), None);
	}

	#[test]
	fn reruns_are_reproducible() {
		let config = Config::default();
		let first = run(&config).unwrap();
		let second = run(&config).unwrap();

		assert_eq!(first.total, second.total);
		assert_eq!(first.runs, second.runs);
	}

	#[test]
	fn different_seed_changes_the_chain() {
		let config = Config {
			sequence_len: 1000,
			initial_seed: 7,
			..Default::default()
		};
		let report = run(&config).unwrap();

		assert_eq!(report.runs[0].seed, config.lcg.next_state(7));
		assert_ne!(report.runs[0].seed, run(&Config::default()).unwrap().runs[0].seed);
	}
}
