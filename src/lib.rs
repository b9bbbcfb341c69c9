pub mod bench;
pub mod config;
pub mod lcg;
pub mod logging;
pub mod solver;
mod tests;

pub use bench::{Report, RunResult, run};
pub use config::Config;
