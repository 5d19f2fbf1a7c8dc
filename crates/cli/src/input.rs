//! Parsing of raw prompt input.

use rucksack_inventory::{InventoryError, InventoryResult};

/// Parse a quantity entered at the prompt.
///
/// Parsed as `i64` first so that `-3` and `0` are rejected as out of range
/// rather than unparsable; both collapse into `InvalidQuantity`, carrying
/// the raw text for the report.
pub fn parse_quantity(raw: &str) -> InventoryResult<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value >= 1 && value <= i64::from(u32::MAX) => Ok(value as u32),
        _ => Err(InventoryError::invalid_quantity(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_quantity("2").unwrap(), 2);
        assert_eq!(parse_quantity(" 17 ").unwrap(), 17);
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-3").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = parse_quantity("muitos").unwrap_err();
        assert_eq!(err, InventoryError::InvalidQuantity("muitos".to_string()));
    }
}
