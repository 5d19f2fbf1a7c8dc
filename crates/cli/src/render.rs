//! Text rendering for the menu frontend.

use std::io::{self, Write};

use rucksack_inventory::{Inventory, Item};

const TABLE_BORDER: &str = "+----------------------+----------------+------------+";

/// Render the option menu and the selection prompt.
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=============================")?;
    writeln!(out, " Rucksack inventory tracker")?;
    writeln!(out, "=============================")?;
    writeln!(out, " 1. Add item")?;
    writeln!(out, " 2. Remove item by name")?;
    writeln!(out, " 3. List items")?;
    writeln!(out, " 4. Find item by name")?;
    writeln!(out, " 0. Exit")?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

/// Render the full inventory as a fixed-width table.
pub fn table<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    writeln!(
        out,
        "\nInventory ({}/{})",
        inventory.len(),
        Inventory::CAPACITY
    )?;
    if inventory.is_empty() {
        return writeln!(out, "  The inventory is empty.");
    }

    writeln!(out, "{TABLE_BORDER}")?;
    writeln!(
        out,
        "| {:<20} | {:<14} | {:>10} |",
        "Name", "Category", "Quantity"
    )?;
    writeln!(out, "{TABLE_BORDER}")?;
    for item in inventory.items() {
        writeln!(
            out,
            "| {:<20} | {:<14} | {:>10} |",
            item.name(),
            item.category(),
            item.quantity()
        )?;
    }
    writeln!(out, "{TABLE_BORDER}")
}

/// Render the detail card for a single found item.
pub fn detail<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "\nItem found:")?;
    writeln!(out, "  Name:     {}", item.name())?;
    writeln!(out, "  Category: {}", item.category())?;
    writeln!(out, "  Quantity: {}", item.quantity())
}
