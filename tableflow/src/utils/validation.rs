//! Input validation helpers
//!
//! The view layer validates its forms, but the store checks again so a bad
//! command can never break the table invariants.

use shared::{MAX_SEATS, MIN_SEATS, Table};

use crate::tables::traits::TableError;

/// Validate a seat count against `MIN_SEATS..=MAX_SEATS`.
pub fn validate_seat_count(seats: u32) -> Result<u32, TableError> {
    if !Table::is_valid_seat_count(seats) {
        return Err(TableError::InvalidSeatCount {
            seats,
            min: MIN_SEATS,
            max: MAX_SEATS,
        });
    }
    Ok(seats)
}

/// Validate an item name and return it trimmed.
pub fn validate_item_name(name: &str) -> Result<&str, TableError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TableError::EmptyItemName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_count_range() {
        assert!(validate_seat_count(0).is_err());
        assert_eq!(validate_seat_count(1).unwrap(), 1);
        assert_eq!(validate_seat_count(20).unwrap(), 20);
        assert!(matches!(
            validate_seat_count(21),
            Err(TableError::InvalidSeatCount { seats: 21, .. })
        ));
    }

    #[test]
    fn test_item_name_is_trimmed() {
        assert_eq!(validate_item_name("  Borscht ").unwrap(), "Borscht");
    }

    #[test]
    fn test_blank_item_name_rejected() {
        assert_eq!(validate_item_name(""), Err(TableError::EmptyItemName));
        assert_eq!(validate_item_name(" \t\n"), Err(TableError::EmptyItemName));
    }

    #[test]
    fn test_long_item_name_accepted() {
        let long = "x".repeat(1000);
        assert_eq!(validate_item_name(&long).unwrap().len(), 1000);
    }
}
