mod arg;
mod error;
mod negate;

pub mod cli;
pub mod proc;
pub mod value;

pub use arg::Arg;
pub use cli::states::{Build, Ready};
pub use cli::Cli;
pub use error::Error;
pub use proc::Program;
pub use std::process::ExitCode;
