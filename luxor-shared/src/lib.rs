pub mod models;
pub mod pii;

pub use models::{
    Booking, Guest, GuestId, GuestIdError, HotelDate, HotelDateError, LocationError, RoomLocation,
    FLOOR_COUNT, ROOMS_PER_FLOOR,
};
pub use pii::Masked;
