use std::collections::HashSet;

use luxor_shared::{Booking, GuestId, Masked, RoomLocation, FLOOR_COUNT, ROOMS_PER_FLOOR};
use serde::{Deserialize, Serialize};

use crate::{GridError, GridResult};

/// One room slot in the hotel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Booking),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(booking) => Some(booking),
        }
    }
}

/// In-memory occupancy of the whole hotel plus the registry of primary guest
/// ids already checked in. Owned by the caller; every operation takes `&self`/`&mut self`.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    floors: [[Cell; ROOMS_PER_FLOOR]; FLOOR_COUNT],
    used_ids: HashSet<GuestId>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self {
            floors: std::array::from_fn(|_| std::array::from_fn(|_| Cell::Empty)),
            used_ids: HashSet::new(),
        }
    }

    /// Check a booking into a room.
    ///
    /// Every check runs before the grid is touched, so a rejected booking
    /// leaves both the cells and the id registry exactly as they were.
    pub fn assign_room(&mut self, booking: Booking, location: RoomLocation) -> GridResult<()> {
        if !booking.has_valid_stay() {
            return Err(GridError::DateOrderViolation {
                check_in: booking.check_in,
                check_out: booking.check_out,
            });
        }

        if self.used_ids.contains(&booking.id()) {
            tracing::warn!(guest_id = %Masked(booking.id()), "Rejected booking with duplicate id");
            return Err(GridError::DuplicateId(booking.id()));
        }

        // Nobody may appear twice on the same booking
        let mut seen = HashSet::new();
        if let Some(id) = booking.guest_ids().find(|id| !seen.insert(*id)) {
            tracing::warn!(guest_id = %Masked(id), "Rejected booking listing a person twice");
            return Err(GridError::DuplicateId(id));
        }

        if !self.cell(location).is_empty() {
            return Err(GridError::RoomOccupied(location));
        }

        tracing::info!(
            floor = location.floor(),
            room = location.room(),
            occupants = booking.occupants(),
            guest = %Masked(booking.last_name()),
            "Guest checked in"
        );

        self.used_ids.insert(booking.id());
        self.floors[location.floor_index()][location.room_index()] = Cell::Occupied(booking);
        Ok(())
    }

    /// Same as [`assign_room`](Self::assign_room) for raw 1-based numbers.
    pub fn assign_room_at(&mut self, booking: Booking, floor: u32, room: u32) -> GridResult<()> {
        let location = RoomLocation::new(floor, room)?;
        self.assign_room(booking, location)
    }

    /// Check out a single room, releasing its primary guest id.
    pub fn vacate_room(&mut self, location: RoomLocation) -> GridResult<Booking> {
        let cell = std::mem::take(&mut self.floors[location.floor_index()][location.room_index()]);
        match cell {
            Cell::Empty => Err(GridError::RoomNotOccupied(location)),
            Cell::Occupied(booking) => {
                self.used_ids.remove(&booking.id());
                tracing::info!(floor = location.floor(), room = location.room(), "Room vacated");
                Ok(booking)
            }
        }
    }

    /// Vacate every room and forget every id. Irreversible.
    pub fn reset(&mut self) {
        let released = self.occupied_count();
        *self = Self::new();
        tracing::info!(released, "Hotel vacated");
    }

    pub fn get(&self, location: RoomLocation) -> Option<&Booking> {
        self.cell(location).booking()
    }

    pub fn cell(&self, location: RoomLocation) -> &Cell {
        &self.floors[location.floor_index()][location.room_index()]
    }

    /// Whether `id` belongs to the primary guest of a current booking.
    pub fn is_id_used(&self, id: GuestId) -> bool {
        self.used_ids.contains(&id)
    }

    pub fn occupied_count(&self) -> usize {
        self.bookings().count()
    }

    /// Floors from the ground up (index 0 is floor 1).
    pub fn floors(&self) -> &[[Cell; ROOMS_PER_FLOOR]; FLOOR_COUNT] {
        &self.floors
    }

    /// Occupied rooms in grid scan order.
    pub fn bookings(&self) -> impl Iterator<Item = (RoomLocation, &Booking)> + '_ {
        self.floors.iter().enumerate().flat_map(|(floor_index, floor)| {
            floor.iter().enumerate().filter_map(move |(room_index, cell)| {
                cell.booking()
                    .map(|booking| (RoomLocation::from_indices(floor_index, room_index), booking))
            })
        })
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}
