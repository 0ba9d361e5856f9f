use serde::{Deserialize, Serialize};
use std::fmt;

pub const FLOOR_COUNT: usize = 10;
pub const ROOMS_PER_FLOOR: usize = 6;

/// A room as guests see it: 1-based floor and room number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomLocation {
    floor: u8,
    room: u8,
}

impl RoomLocation {
    pub fn new(floor: u32, room: u32) -> Result<Self, LocationError> {
        if floor < 1 || floor as usize > FLOOR_COUNT {
            return Err(LocationError::FloorOutOfRange(floor));
        }
        if room < 1 || room as usize > ROOMS_PER_FLOOR {
            return Err(LocationError::RoomOutOfRange(room));
        }
        Ok(Self {
            floor: floor as u8,
            room: room as u8,
        })
    }

    /// Builds a location from zero-based grid indices.
    pub fn from_indices(floor_index: usize, room_index: usize) -> Self {
        debug_assert!(floor_index < FLOOR_COUNT && room_index < ROOMS_PER_FLOOR);
        Self {
            floor: floor_index as u8 + 1,
            room: room_index as u8 + 1,
        }
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn room(&self) -> u8 {
        self.room
    }

    pub fn floor_index(&self) -> usize {
        self.floor as usize - 1
    }

    pub fn room_index(&self) -> usize {
        self.room as usize - 1
    }

    /// Every location in grid scan order: floor 1 to 10, room 1 to 6 within each floor.
    pub fn all() -> impl Iterator<Item = RoomLocation> {
        (0..FLOOR_COUNT).flat_map(|f| (0..ROOMS_PER_FLOOR).map(move |r| Self::from_indices(f, r)))
    }
}

impl fmt::Display for RoomLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}, room {}", self.floor, self.room)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Floor must be between 1 and {max}, got {0}", max = FLOOR_COUNT)]
    FloorOutOfRange(u32),

    #[error("Room must be between 1 and {max}, got {0}", max = ROOMS_PER_FLOOR)]
    RoomOutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(RoomLocation::new(1, 1).is_ok());
        assert!(RoomLocation::new(10, 6).is_ok());
        assert_eq!(RoomLocation::new(0, 1), Err(LocationError::FloorOutOfRange(0)));
        assert_eq!(RoomLocation::new(11, 1), Err(LocationError::FloorOutOfRange(11)));
        assert_eq!(RoomLocation::new(3, 7), Err(LocationError::RoomOutOfRange(7)));
    }

    #[test]
    fn test_indices_are_zero_based() {
        let location = RoomLocation::new(3, 2).unwrap();
        assert_eq!((location.floor_index(), location.room_index()), (2, 1));
    }

    #[test]
    fn test_scan_order() {
        let all: Vec<RoomLocation> = RoomLocation::all().collect();
        assert_eq!(all.len(), FLOOR_COUNT * ROOMS_PER_FLOOR);
        assert_eq!(all[0], RoomLocation::new(1, 1).unwrap());
        assert_eq!(all[1], RoomLocation::new(1, 2).unwrap());
        assert_eq!(all[6], RoomLocation::new(2, 1).unwrap());
        assert_eq!(all[59], RoomLocation::new(10, 6).unwrap());
    }
}
