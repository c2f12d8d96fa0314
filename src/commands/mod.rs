pub mod command;

pub use command::{Command, CommandRecord, CommandType};
