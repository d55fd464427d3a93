use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod commands;
pub mod ledger;

#[cfg(test)]
mod ledger_tests;

use commands::{ChangeUnitPrice, Clear, Command, Help, Purchase, SetDefaultProduct, Stats};
use ledger::Ledger;

#[derive(Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown arguments, run 'help' for usage")]
    UnknownArguments,
    #[error("'{command}' requires a {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a valid unit price")]
    InvalidPrice(String),
}

#[enum_dispatch]
pub trait ExecutableCommand {
    fn execute(&self, ledger: &mut Ledger);

    /// Whether the ledger must be written back to storage after execution.
    fn persists(&self) -> bool;

    /// Whether the stats report is printed after execution.
    fn prints_report(&self) -> bool;
}
