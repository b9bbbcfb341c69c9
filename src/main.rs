use anyhow::Result;
use kadane_bench::{Config, logging};
use tracing::error;

fn main() -> Result<()> {
	logging::init_logger()?;

	// parameters are fixed, the binary reads no config file
	let config = Config::default();

	match kadane_bench::run(&config) {
		Ok(report) => {
			println!("{report}");
			Ok(())
		}
		Err(e) => {
			error!("{e:?}");
			eprintln!("Benchmark failed. Recent logs:");
			let _ = logging::dump_logs(std::io::stderr());
			Err(e)
		}
	}
}
