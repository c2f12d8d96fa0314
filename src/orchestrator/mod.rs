pub mod orchestrator;

pub use orchestrator::{apply, process, run, write_report};
