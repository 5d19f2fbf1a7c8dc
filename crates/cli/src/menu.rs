//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use rucksack_inventory::{Inventory, InventoryError, Item};

use crate::{input, render};

/// One entry of the option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    RemoveItem,
    ListItems,
    FindItem,
    Exit,
}

impl MenuChoice {
    /// Parse one line of menu input; `None` is an invalid selection.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>() {
            Ok(1) => Some(Self::AddItem),
            Ok(2) => Some(Self::RemoveItem),
            Ok(3) => Some(Self::ListItems),
            Ok(4) => Some(Self::FindItem),
            Ok(0) => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive session: owns the inventory and drives the menu loop
/// against the given streams until exit or end of input.
pub struct MenuSession<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run the loop until `Exit` is chosen or the input stream ends.
    ///
    /// Returns the final inventory so callers (and tests) can inspect it.
    /// Only stream failures escape; domain failures are reported inline and
    /// the loop continues.
    pub fn run(mut self) -> io::Result<Inventory> {
        loop {
            render::menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                // EOF behaves like choosing Exit.
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddItem) => self.add_item()?,
                Some(MenuChoice::RemoveItem) => self.remove_item()?,
                Some(MenuChoice::ListItems) => render::table(&mut self.output, &self.inventory)?,
                Some(MenuChoice::FindItem) => self.find_item()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nInventory closed. Good luck out there.")?;
                    break;
                }
                None => {
                    tracing::debug!(input = line.as_str(), "invalid menu selection");
                    writeln!(
                        self.output,
                        "\nInvalid selection '{line}'. Choose an option from 0 to 4."
                    )?;
                }
            }
        }
        Ok(self.inventory)
    }

    fn add_item(&mut self) -> io::Result<()> {
        // Checked up front so the user is not prompted for an item that
        // could never be stored.
        if self.inventory.is_full() {
            return self.report(&InventoryError::capacity_exceeded(Inventory::CAPACITY));
        }

        let Some(name) = self.prompt("Item name")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.report(&InventoryError::EmptyName);
        }
        if self.inventory.find(&name).is_some() {
            return self.report(&InventoryError::duplicate(&name));
        }

        let Some(category) = self.prompt("Category")? else {
            return Ok(());
        };
        let Some(raw_quantity) = self.prompt("Quantity")? else {
            return Ok(());
        };
        let quantity = match input::parse_quantity(&raw_quantity) {
            Ok(quantity) => quantity,
            Err(err) => return self.report(&err),
        };

        let item = match Item::new(name, category, quantity) {
            Ok(item) => item,
            Err(err) => return self.report(&err),
        };
        let summary = format!("Added '{}' (x{}).", item.name(), item.quantity());
        match self.inventory.add(item) {
            Ok(()) => writeln!(self.output, "{summary}"),
            Err(err) => self.report(&err),
        }
    }

    fn remove_item(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name of the item to remove")? else {
            return Ok(());
        };
        match self.inventory.remove(&name) {
            Ok(item) => writeln!(self.output, "Removed '{}'.", item.name()),
            Err(err) => self.report(&err),
        }
    }

    fn find_item(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name of the item to find")? else {
            return Ok(());
        };
        match self.inventory.find(&name) {
            Some(item) => render::detail(&mut self.output, item),
            None => self.report(&InventoryError::not_found(name)),
        }
    }

    fn report(&mut self, err: &InventoryError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one trimmed line; `None` means the stream ended.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_digits_to_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddItem));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::ListItems));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_non_menu_input() {
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("list"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
