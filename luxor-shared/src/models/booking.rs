use serde::{Deserialize, Serialize};

use super::date::HotelDate;
use super::guest::{Guest, GuestId};

/// A stay in one room: the registering guest, the dates of the stay and
/// everyone else sharing the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub primary: Guest,
    pub check_in: HotelDate,
    pub check_out: HotelDate,
    pub additional_occupants: Vec<Guest>,
}

impl Booking {
    pub fn new(primary: Guest, check_in: HotelDate, check_out: HotelDate) -> Self {
        Self {
            primary,
            check_in,
            check_out,
            additional_occupants: Vec::new(),
        }
    }

    /// Builder-style helper to add a person sharing the room
    pub fn with_occupant(mut self, occupant: Guest) -> Self {
        self.additional_occupants.push(occupant);
        self
    }

    /// Head count in the room, always at least one.
    pub fn occupants(&self) -> usize {
        1 + self.additional_occupants.len()
    }

    pub fn id(&self) -> GuestId {
        self.primary.id
    }

    pub fn last_name(&self) -> &str {
        &self.primary.last_name
    }

    /// Ids of everyone on the booking, primary first.
    pub fn guest_ids(&self) -> impl Iterator<Item = GuestId> + '_ {
        std::iter::once(self.primary.id).chain(self.additional_occupants.iter().map(|o| o.id))
    }

    pub fn has_valid_stay(&self) -> bool {
        self.check_in < self.check_out
    }
}
