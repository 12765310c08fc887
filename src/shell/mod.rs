//! Subprocess execution and interrupt handling.

pub mod command;
pub mod interrupt;

pub use command::{
    execute, CommandOptions, CommandResult, CommandRunner, CommandSpec, SystemRunner,
};
pub use interrupt::InterruptFlag;
