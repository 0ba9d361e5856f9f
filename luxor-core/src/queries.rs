use luxor_shared::{Booking, HotelDate, RoomLocation};

use crate::grid::OccupancyGrid;

/// A booking due to leave, with how many days remain (negative if overdue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure<'a> {
    pub location: RoomLocation,
    pub booking: &'a Booking,
    pub days_left: i64,
}

impl OccupancyGrid {
    /// First booking, in grid scan order, whose primary guest carries this
    /// last name (case-insensitive). Additional occupants are not searched.
    pub fn find_by_last_name(&self, name: &str) -> Option<(RoomLocation, &Booking)> {
        let found = self
            .bookings()
            .find(|(_, booking)| booking.primary.has_last_name(name));
        tracing::debug!(found = found.is_some(), "Last name lookup");
        found
    }

    /// Floor (1-based) with the most occupied rooms. Ties go to the lowest floor.
    pub fn most_occupied_floor_by_rooms(&self) -> Option<u8> {
        busiest_floor(self.per_floor(|_| 1))
    }

    /// Floor (1-based) with the most people staying on it. Ties go to the lowest floor.
    pub fn floor_with_most_occupants(&self) -> Option<u8> {
        busiest_floor(self.per_floor(Booking::occupants))
    }

    pub fn empty_room_count(&self) -> usize {
        self.floors()
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Every booking sharing the smallest number of days until check-out,
    /// counted from `today`. Overdue stays count as valid (negative) minimums.
    pub fn next_departures(&self, today: HotelDate) -> Vec<Departure<'_>> {
        let departures: Vec<Departure<'_>> = self
            .bookings()
            .map(|(location, booking)| Departure {
                location,
                booking,
                days_left: today.days_until(&booking.check_out),
            })
            .collect();

        let Some(closest) = departures.iter().map(|d| d.days_left).min() else {
            return Vec::new();
        };

        departures
            .into_iter()
            .filter(|d| d.days_left == closest)
            .collect()
    }

    fn per_floor(&self, weight: impl Fn(&Booking) -> usize) -> Vec<usize> {
        self.floors()
            .iter()
            .map(|floor| floor.iter().filter_map(|cell| cell.booking()).map(&weight).sum())
            .collect()
    }
}

/// 1-based index of the first maximum, or `None` when every floor is empty.
fn busiest_floor(totals: Vec<usize>) -> Option<u8> {
    let mut best: Option<(usize, usize)> = None;
    for (index, total) in totals.into_iter().enumerate() {
        if total == 0 {
            continue;
        }
        match best {
            Some((_, best_total)) if best_total >= total => {}
            _ => best = Some((index, total)),
        }
    }
    best.map(|(index, _)| index as u8 + 1)
}
