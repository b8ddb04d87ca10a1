//! Table Model

use super::guest::Guest;
use super::order_item::OrderItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Smallest allowed seat count
pub const MIN_SEATS: u32 = 1;

/// Largest allowed seat count
pub const MAX_SEATS: u32 = 20;

/// Table shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    #[default]
    Round,
    /// Older data used `square` for the same layout
    #[serde(alias = "square")]
    Rectangular,
}

/// The single table session (root aggregate)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub shape: TableShape,
    /// Fixed at creation, always equal to `guests.len()`
    pub seats: u32,
    /// Ordered by seat id
    pub guests: Vec<Guest>,
    /// Items shared by the whole table
    #[serde(default)]
    pub common_order: Vec<OrderItem>,
}

impl Table {
    /// Fresh table with guests `1..=seats`. The seat count is not checked here.
    pub fn new(shape: TableShape, seats: u32) -> Self {
        Self {
            shape,
            seats,
            guests: (1..=seats).map(Guest::new).collect(),
            common_order: Vec::new(),
        }
    }

    pub fn is_valid_seat_count(seats: u32) -> bool {
        (MIN_SEATS..=MAX_SEATS).contains(&seats)
    }

    pub fn guest(&self, guest_id: u32) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    pub fn guest_mut(&mut self, guest_id: u32) -> Option<&mut Guest> {
        self.guests.iter_mut().find(|g| g.id == guest_id)
    }

    pub fn find_common_item(&self, item_id: &str) -> Option<&OrderItem> {
        self.common_order.iter().find(|item| item.id == item_id)
    }

    /// Check structural invariants (used when restoring persisted data)
    pub fn validate(&self) -> Result<(), TableInvariantError> {
        if !Self::is_valid_seat_count(self.seats) {
            return Err(TableInvariantError::SeatCount(self.seats));
        }
        if self.guests.len() != self.seats as usize {
            return Err(TableInvariantError::GuestCount {
                guests: self.guests.len(),
                seats: self.seats,
            });
        }
        for (index, guest) in self.guests.iter().enumerate() {
            let seat = index as u32 + 1;
            if guest.id != seat {
                return Err(TableInvariantError::GuestOrder {
                    seat,
                    guest_id: guest.id,
                });
            }
            if let Some(dup) = first_duplicate_id(&guest.orders) {
                return Err(TableInvariantError::DuplicateGuestItem {
                    guest_id: guest.id,
                    item_id: dup.to_string(),
                });
            }
        }
        if let Some(dup) = first_duplicate_id(&self.common_order) {
            return Err(TableInvariantError::DuplicateCommonItem(dup.to_string()));
        }
        Ok(())
    }
}

/// A restored table that breaks the seat/guest/item invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableInvariantError {
    #[error("seat count {0} outside {min}..={max}", min = MIN_SEATS, max = MAX_SEATS)]
    SeatCount(u32),

    #[error("{guests} guests for {seats} seats")]
    GuestCount { guests: usize, seats: u32 },

    #[error("guest at seat {seat} has id {guest_id}")]
    GuestOrder { seat: u32, guest_id: u32 },

    #[error("guest {guest_id} has duplicate item id {item_id}")]
    DuplicateGuestItem { guest_id: u32, item_id: String },

    #[error("common order has duplicate item id {0}")]
    DuplicateCommonItem(String),
}

fn first_duplicate_id(items: &[OrderItem]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(|item| item.id.as_str())
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuestStatus, OrderItemStatus};

    #[test]
    fn test_new_table_seats_guests() {
        for seats in MIN_SEATS..=MAX_SEATS {
            let table = Table::new(TableShape::Rectangular, seats);
            assert_eq!(table.guests.len(), seats as usize);
            let ids: Vec<u32> = table.guests.iter().map(|g| g.id).collect();
            assert_eq!(ids, (1..=seats).collect::<Vec<_>>());
            assert!(table.common_order.is_empty());
            assert!(table.validate().is_ok());
        }
    }

    #[test]
    fn test_seat_count_bounds() {
        assert!(!Table::is_valid_seat_count(0));
        assert!(Table::is_valid_seat_count(1));
        assert!(Table::is_valid_seat_count(20));
        assert!(!Table::is_valid_seat_count(21));
    }

    #[test]
    fn test_validate_rejects_guest_count_mismatch() {
        let mut table = Table::new(TableShape::Round, 3);
        table.guests.pop();
        assert_eq!(
            table.validate(),
            Err(TableInvariantError::GuestCount {
                guests: 2,
                seats: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_out_of_order_ids() {
        let mut table = Table::new(TableShape::Round, 3);
        table.guests.swap(0, 1);
        assert_eq!(
            table.validate(),
            Err(TableInvariantError::GuestOrder {
                seat: 1,
                guest_id: 2
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_item_ids() {
        let mut table = Table::new(TableShape::Round, 2);
        table.common_order.push(OrderItem::new("x", "Bread"));
        table.common_order.push(OrderItem::new("x", "Water"));
        assert_eq!(
            table.validate(),
            Err(TableInvariantError::DuplicateCommonItem("x".to_string()))
        );
    }

    #[test]
    fn test_same_item_id_in_different_lists_is_fine() {
        let mut table = Table::new(TableShape::Round, 2);
        table.guests[0].orders.push(OrderItem::new("x", "Soup"));
        table.guests[1].orders.push(OrderItem::new("x", "Salad"));
        table.common_order.push(OrderItem::new("x", "Bread"));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_wire_format_uses_camel_case_and_snake_case_enums() {
        let mut table = Table::new(TableShape::Rectangular, 1);
        table.guests[0].status = GuestStatus::AllServed;
        table.common_order.push(OrderItem {
            id: "c1".to_string(),
            name: "Wine".to_string(),
            status: OrderItemStatus::Served,
        });

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["shape"], "rectangular");
        assert_eq!(value["guests"][0]["status"], "all_served");
        assert_eq!(value["commonOrder"][0]["status"], "served");
    }

    #[test]
    fn test_legacy_square_shape_decodes_as_rectangular() {
        let json = r#"{"shape":"square","seats":1,"guests":[{"id":1,"name":"Guest 1","status":"active","orders":[]}],"commonOrder":[]}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.shape, TableShape::Rectangular);
    }
}
