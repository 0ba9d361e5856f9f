use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date::HotelDate;

const ID_MIN: u32 = 10_000_000;
const ID_MAX: u32 = 99_999_999;

/// Eight digit identity number of a person staying at the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GuestId(u32);

impl GuestId {
    pub fn new(value: u32) -> Result<Self, GuestIdError> {
        if (ID_MIN..=ID_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GuestIdError::WrongWidth(value.to_string()))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for GuestId {
    type Err = GuestIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value: i64 = raw
            .parse()
            .map_err(|_| GuestIdError::NotNumeric(raw.to_string()))?;
        u32::try_from(value)
            .map_err(|_| GuestIdError::WrongWidth(raw.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<u32> for GuestId {
    type Error = GuestIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestId> for u32 {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuestIdError {
    #[error("ID must be a number: {0}")]
    NotNumeric(String),

    #[error("ID must have 8 digits: {0}")]
    WrongWidth(String),
}

/// A person on the roster. The primary guest of a booking and each of the
/// additional occupants share this shape; only the booking carries stay dates.
///
/// Names are stored without surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: HotelDate,
}

impl Guest {
    pub fn new(
        id: GuestId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: HotelDate,
    ) -> Self {
        let (first_name, last_name): (String, String) = (first_name.into(), last_name.into());
        Self {
            id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            birth_date,
        }
    }

    pub fn has_last_name(&self, name: &str) -> bool {
        self.last_name.to_lowercase() == name.trim().to_lowercase()
    }
}
