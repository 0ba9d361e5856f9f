use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar day as the front desk writes it: `ddmmyyyy`.
///
/// Numeric entry drops a leading zero (`01012025` arrives as `1012025`), so a
/// seven digit value is read as if it had been zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HotelDate(NaiveDate);

impl HotelDate {
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Result<Self, HotelDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| HotelDateError::NoSuchDay(format!("{:02}{:02}{:04}", day, month, year)))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Whole days from `self` until `later`; negative when `later` is in the past.
    pub fn days_until(&self, later: &HotelDate) -> i64 {
        (later.0 - self.0).num_days()
    }
}

impl FromStr for HotelDate {
    type Err = HotelDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HotelDateError::NotNumeric(raw.to_string()));
        }

        let padded = match raw.len() {
            8 => raw.to_string(),
            7 => format!("0{}", raw),
            _ => return Err(HotelDateError::WrongWidth(raw.to_string())),
        };

        // All ASCII digits, so the slices and parses cannot fail.
        let day: u32 = padded[0..2].parse().map_err(|_| HotelDateError::NotNumeric(raw.to_string()))?;
        let month: u32 = padded[2..4].parse().map_err(|_| HotelDateError::NotNumeric(raw.to_string()))?;
        let year: i32 = padded[4..8].parse().map_err(|_| HotelDateError::NotNumeric(raw.to_string()))?;

        Self::from_dmy(day, month, year)
    }
}

impl fmt::Display for HotelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:04}", self.0.day(), self.0.month(), self.0.year())
    }
}

impl From<NaiveDate> for HotelDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for HotelDate {
    type Error = HotelDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HotelDate> for String {
    fn from(date: HotelDate) -> Self {
        date.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotelDateError {
    #[error("Date must contain only digits (ddmmyyyy): {0}")]
    NotNumeric(String),

    #[error("Date must have 8 digits (ddmmyyyy): {0}")]
    WrongWidth(String),

    #[error("No such calendar day: {0}")]
    NoSuchDay(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ddmmyyyy() {
        let date: HotelDate = "05012025".parse().unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(date.to_string(), "05012025");
    }

    #[test]
    fn test_seven_digits_restores_leading_zero() {
        let date: HotelDate = "1012025".parse().unwrap();
        assert_eq!(date, HotelDate::from_dmy(1, 1, 2025).unwrap());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!("abc".parse::<HotelDate>(), Err(HotelDateError::NotNumeric(_))));
        assert!(matches!("".parse::<HotelDate>(), Err(HotelDateError::NotNumeric(_))));
        assert!(matches!("-1012025".parse::<HotelDate>(), Err(HotelDateError::NotNumeric(_))));
        assert!(matches!("123456".parse::<HotelDate>(), Err(HotelDateError::WrongWidth(_))));
        assert!(matches!("31022025".parse::<HotelDate>(), Err(HotelDateError::NoSuchDay(_))));
    }

    #[test]
    fn test_days_until() {
        let today: HotelDate = "02012025".parse().unwrap();
        let checkout: HotelDate = "05012025".parse().unwrap();
        assert_eq!(today.days_until(&checkout), 3);
        assert_eq!(checkout.days_until(&today), -3);

        // Across a month and a leap day
        let feb: HotelDate = "28022024".parse().unwrap();
        let mar: HotelDate = "01032024".parse().unwrap();
        assert_eq!(feb.days_until(&mar), 2);
    }
}
