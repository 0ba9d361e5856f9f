use std::str::FromStr;

/// Options offered at the front desk, numbered as the operator types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGuest,
    FindGuest,
    MostOccupiedFloor,
    EmptyRooms,
    FloorWithMostOccupants,
    NextDepartures,
    ViewHotel,
    SaveGuestFile,
    ClearAndVacate,
    Exit,
    CheckOut,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddGuest,
        MenuChoice::FindGuest,
        MenuChoice::MostOccupiedFloor,
        MenuChoice::EmptyRooms,
        MenuChoice::FloorWithMostOccupants,
        MenuChoice::NextDepartures,
        MenuChoice::ViewHotel,
        MenuChoice::SaveGuestFile,
        MenuChoice::ClearAndVacate,
        MenuChoice::Exit,
        MenuChoice::CheckOut,
    ];

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::AddGuest => 1,
            MenuChoice::FindGuest => 2,
            MenuChoice::MostOccupiedFloor => 3,
            MenuChoice::EmptyRooms => 4,
            MenuChoice::FloorWithMostOccupants => 5,
            MenuChoice::NextDepartures => 6,
            MenuChoice::ViewHotel => 7,
            MenuChoice::SaveGuestFile => 8,
            MenuChoice::ClearAndVacate => 9,
            MenuChoice::Exit => 10,
            MenuChoice::CheckOut => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddGuest => "Enter new guest",
            MenuChoice::FindGuest => "Find guest by last name",
            MenuChoice::MostOccupiedFloor => "Most occupied floor",
            MenuChoice::EmptyRooms => "Number of empty rooms",
            MenuChoice::FloorWithMostOccupants => "Floor with most occupants",
            MenuChoice::NextDepartures => "Next departures",
            MenuChoice::ViewHotel => "View hotel",
            MenuChoice::SaveGuestFile => "Create or update guest file",
            MenuChoice::ClearAndVacate => "Clear guest file and vacate hotel",
            MenuChoice::Exit => "Exit",
            MenuChoice::CheckOut => "Check out a room",
        }
    }

    pub fn menu_text() -> String {
        let mut text = String::from("Menu:");
        for choice in Self::ALL {
            text.push_str(&format!("\n{}. {}", choice.number(), choice.label()));
        }
        text
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s.trim().parse().map_err(|_| s.trim().to_string())?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| s.trim().to_string())
    }
}
