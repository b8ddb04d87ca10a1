//! UpdateGuestDetails command handler

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::{AppState, GuestDetails};

/// UpdateGuestDetails action - merges the provided fields into the guest
#[derive(Debug, Clone)]
pub struct UpdateGuestDetailsAction {
    pub guest_id: u32,
    pub details: GuestDetails,
}

impl CommandHandler for UpdateGuestDetailsAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        if self.details.is_empty() {
            return Ok(None);
        }
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(guest) = table.guest_mut(self.guest_id) else {
            return Ok(None);
        };

        if let Some(name) = &self.details.name {
            guest.name = name.clone();
        }
        if let Some(gender) = self.details.gender {
            guest.gender = gender;
        }

        with_table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::actions::test_fixtures::{state_with_table, table};
    use shared::GuestGender;

    #[test]
    fn test_update_name_only() {
        let action = UpdateGuestDetailsAction {
            guest_id: 1,
            details: GuestDetails::name("Sergei"),
        };
        let next = action.execute(&state_with_table(2)).unwrap();
        let guest = table(&next).guest(1).unwrap();
        assert_eq!(guest.name, "Sergei");
        assert_eq!(guest.gender, GuestGender::Female);
    }

    #[test]
    fn test_update_gender_only() {
        let action = UpdateGuestDetailsAction {
            guest_id: 2,
            details: GuestDetails::gender(GuestGender::Male),
        };
        let next = action.execute(&state_with_table(2)).unwrap();
        let guest = table(&next).guest(2).unwrap();
        assert_eq!(guest.name, "Guest 2");
        assert_eq!(guest.gender, GuestGender::Male);
    }

    #[test]
    fn test_update_both() {
        let action = UpdateGuestDetailsAction {
            guest_id: 1,
            details: GuestDetails {
                name: Some("Alex".to_string()),
                gender: Some(GuestGender::Other),
            },
        };
        let next = action.execute(&state_with_table(1)).unwrap();
        let guest = table(&next).guest(1).unwrap();
        assert_eq!(guest.name, "Alex");
        assert_eq!(guest.gender, GuestGender::Other);
    }

    #[test]
    fn test_empty_details_is_noop() {
        let action = UpdateGuestDetailsAction {
            guest_id: 1,
            details: GuestDetails::default(),
        };
        assert_eq!(action.execute(&state_with_table(1)).unwrap(), None);
    }

    #[test]
    fn test_unknown_guest_is_noop() {
        let action = UpdateGuestDetailsAction {
            guest_id: 7,
            details: GuestDetails::name("Nobody"),
        };
        assert_eq!(action.execute(&state_with_table(1)).unwrap(), None);
    }

    #[test]
    fn test_long_name_accepted() {
        let long = "n".repeat(500);
        let action = UpdateGuestDetailsAction {
            guest_id: 1,
            details: GuestDetails::name(long.clone()),
        };
        let next = action.execute(&state_with_table(1)).unwrap();
        assert_eq!(table(&next).guest(1).unwrap().name, long);
    }
}
