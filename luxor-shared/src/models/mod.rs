pub mod booking;
pub mod date;
pub mod guest;
pub mod location;

pub use booking::Booking;
pub use date::{HotelDate, HotelDateError};
pub use guest::{Guest, GuestId, GuestIdError};
pub use location::{LocationError, RoomLocation, FLOOR_COUNT, ROOMS_PER_FLOOR};
