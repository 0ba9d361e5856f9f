pub mod grid;
pub mod queries;
pub mod repository;

pub use grid::{Cell, OccupancyGrid};
pub use queries::Departure;
pub use repository::GuestRepository;

use luxor_shared::{GuestId, GuestIdError, HotelDate, HotelDateError, LocationError, RoomLocation};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("ID already exists: {0}")]
    DuplicateId(GuestId),

    #[error("Check-in date {check_in} must be before check-out date {check_out}")]
    DateOrderViolation {
        check_in: HotelDate,
        check_out: HotelDate,
    },

    #[error("Room already occupied: {0}")]
    RoomOccupied(RoomLocation),

    #[error("Room is not occupied: {0}")]
    RoomNotOccupied(RoomLocation),

    #[error("Out of range: {0}")]
    OutOfRange(#[from] LocationError),
}

impl From<GuestIdError> for GridError {
    fn from(err: GuestIdError) -> Self {
        GridError::InvalidInput(err.to_string())
    }
}

impl From<HotelDateError> for GridError {
    fn from(err: HotelDateError) -> Self {
        GridError::InvalidInput(err.to_string())
    }
}

pub type GridResult<T> = Result<T, GridError>;
