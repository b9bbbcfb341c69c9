use std::{
	collections::VecDeque,
	io::{self, Write},
	sync::{Mutex, MutexGuard},
};

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::{FmtSubscriber, fmt::MakeWriter};

/// How many log lines to keep around for when the run fails
const MAX_LOG_LINES: usize = 1000;

const LOG_FILTER: &str = "kadane_bench=debug";

static LOG_BUFFER: LogBuffer = LogBuffer::new();

/// Ring buffer of formatted log lines, newest first
pub struct LogBuffer {
	buffer: Mutex<VecDeque<Vec<u8>>>,
}

pub struct LogWriter<'a> {
	lock: MutexGuard<'a, VecDeque<Vec<u8>>>,
}

impl LogBuffer {
	pub const fn new() -> Self {
		Self {
			buffer: Mutex::new(VecDeque::new()),
		}
	}

	fn lock(&self) -> MutexGuard<'_, VecDeque<Vec<u8>>> {
		// a panic mid-write leaves at worst a truncated line
		self.buffer.lock().unwrap_or_else(|e| e.into_inner())
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	/// Writes all buffered lines, oldest first
	pub fn dump(&self, mut out: impl Write) -> io::Result<()> {
		let buffer = self.lock();

		for line in buffer.iter().rev() {
			out.write_all(line)?;
		}

		out.flush()
	}
}

impl Write for LogWriter<'_> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self.lock.front_mut() {
			Some(log_line) => log_line.write(buf),
			None => Ok(buf.len()),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for &'static LogBuffer {
	type Writer = LogWriter<'a>;

	fn make_writer(&'a self) -> Self::Writer {
		let mut buffer = self.lock();

		// remove oldest log line if we're at limit
		if buffer.len() == MAX_LOG_LINES {
			buffer.pop_back();
		}

		buffer.push_front(Vec::new());

		LogWriter { lock: buffer }
	}
}

fn subscriber(buffer: &'static LogBuffer) -> impl Subscriber + Send + Sync {
	FmtSubscriber::builder()
		.with_env_filter(LOG_FILTER)
		.json()
		.with_writer(buffer)
		.finish()
}

pub fn init_logger() -> Result<()> {
	tracing::subscriber::set_global_default(subscriber(&LOG_BUFFER))?;

	Ok(())
}

/// Writes the buffered log lines of the global logger to `out`
pub fn dump_logs(out: impl Write) -> io::Result<()> {
	LOG_BUFFER.dump(out)
}
