use std::io;

use anyhow::Result;
use rucksack_cli::MenuSession;
use rucksack_inventory::Inventory;

fn main() -> Result<()> {
    rucksack_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = MenuSession::new(Inventory::starter(), stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
