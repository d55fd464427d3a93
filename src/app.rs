use anyhow::Result;
use log::debug;

use crate::report;
use crate::store::JsonStore;
use crate::tally::commands::Command;
use crate::tally::ExecutableCommand;

/// One full invocation: load the ledger, interpret the arguments, apply the
/// command, then write back and report as the command requires.
///
/// The ledger is loaded before the command is interpreted, so a malformed
/// save file is fatal for every command, `clear` and `help` included.
pub fn run(store: &JsonStore, args: &[String]) -> Result<()> {
    let mut ledger = store.load()?;
    let command = Command::try_from(args)?;
    debug!("dispatching {command:?}");

    if let Command::Clear(_) = command {
        println!("Clearing save data...");
        store.clear()?;
        println!("Data cleared.");
        return Ok(());
    }

    command.execute(&mut ledger);

    if command.persists() {
        store.save(&ledger)?;
    }

    if command.prints_report() {
        print!("{}", report::render(&ledger));
    }

    Ok(())
}
