use std::io::{self, BufRead, Write};

use luxor_core::{GridError, GuestRepository, OccupancyGrid};
use luxor_shared::{Booking, Guest, GuestId, GuestIdError, HotelDate, HotelDateError, RoomLocation};

use crate::menu::MenuChoice;
use crate::render;

/// Why a single menu action stopped early.
#[derive(Debug, thiserror::Error)]
enum DeskError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    Grid(#[from] GridError),

    #[error("{0}")]
    Store(String),

    /// Operator backed out; nothing to report.
    #[error("aborted")]
    Aborted,
}

impl From<GuestIdError> for DeskError {
    fn from(err: GuestIdError) -> Self {
        DeskError::Grid(err.into())
    }
}

impl From<HotelDateError> for DeskError {
    fn from(err: HotelDateError) -> Self {
        DeskError::Grid(err.into())
    }
}

type DeskResult<T> = Result<T, DeskError>;

/// Console session around one occupancy grid. Reads operator input line by
/// line and writes every prompt and result to `output`.
pub struct FrontDesk<R, W, S> {
    input: R,
    output: W,
    grid: OccupancyGrid,
    store: S,
    hotel_name: String,
}

impl<R, W, S> FrontDesk<R, W, S>
where
    R: BufRead,
    W: Write,
    S: GuestRepository,
{
    pub fn new(input: R, output: W, grid: OccupancyGrid, store: S, hotel_name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            grid,
            store,
            hotel_name: hotel_name.into(),
        }
    }

    /// Start a session with the roster found in `store`. A roster that cannot
    /// be read is reported and the session starts with an empty hotel.
    pub fn open(input: R, mut output: W, store: S, hotel_name: impl Into<String>) -> io::Result<Self> {
        let grid = match store.load() {
            Ok(grid) => grid,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load guest file");
                writeln!(output, "Could not load saved guests ({}). Starting with an empty hotel.", e)?;
                OccupancyGrid::new()
            }
        };
        Ok(Self::new(input, output, grid, store, hotel_name))
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Serve menu requests until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let banner = "=".repeat(self.hotel_name.len() + 11);
        writeln!(self.output, "{}\nWELCOME TO {}\n{}", banner, self.hotel_name.to_uppercase(), banner)?;

        loop {
            writeln!(self.output, "\n{}", MenuChoice::menu_text())?;
            let line = match self.ask("Choose an option: ") {
                Ok(line) => line,
                Err(DeskError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(DeskError::Io(e)) => return Err(e),
                Err(_) => continue,
            };

            let Ok(choice) = line.parse::<MenuChoice>() else {
                writeln!(self.output, "Invalid option, choose 1-{}.", MenuChoice::ALL.len())?;
                continue;
            };
            tracing::debug!(?choice, "Menu option selected");

            if choice == MenuChoice::Exit {
                break;
            }

            match self.handle(choice) {
                Ok(()) | Err(DeskError::Aborted) => {}
                Err(DeskError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(DeskError::Io(e)) => return Err(e),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        tracing::info!("Front desk closed");
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> DeskResult<()> {
        match choice {
            MenuChoice::AddGuest => self.add_guest(),
            MenuChoice::FindGuest => self.find_guest(),
            MenuChoice::MostOccupiedFloor => {
                match self.grid.most_occupied_floor_by_rooms() {
                    Some(floor) => writeln!(self.output, "Most occupied floor is: {}", floor)?,
                    None => writeln!(self.output, "No rooms are occupied.")?,
                }
                Ok(())
            }
            MenuChoice::EmptyRooms => {
                writeln!(self.output, "Number of empty rooms: {}", self.grid.empty_room_count())?;
                Ok(())
            }
            MenuChoice::FloorWithMostOccupants => {
                match self.grid.floor_with_most_occupants() {
                    Some(floor) => writeln!(self.output, "Floor with most occupants: {}", floor)?,
                    None => writeln!(self.output, "No rooms are occupied.")?,
                }
                Ok(())
            }
            MenuChoice::NextDepartures => self.next_departures(),
            MenuChoice::ViewHotel => {
                writeln!(self.output, "{}", render::hotel_table(&self.grid))?;
                Ok(())
            }
            MenuChoice::SaveGuestFile => {
                self.store
                    .save(&self.grid)
                    .map_err(|e| DeskError::Store(e.to_string()))?;
                writeln!(self.output, "Guest file created successfully.")?;
                Ok(())
            }
            MenuChoice::ClearAndVacate => {
                self.grid.reset();
                self.store.clear().map_err(|e| DeskError::Store(e.to_string()))?;
                writeln!(self.output, "Guest file cleared successfully.")?;
                Ok(())
            }
            MenuChoice::CheckOut => self.check_out(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_guest(&mut self) -> DeskResult<()> {
        if self.grid.empty_room_count() == 0 {
            writeln!(self.output, "The hotel is full, no rooms available.")?;
            return Ok(());
        }

        let raw_id = self.ask("Enter ID (-1 to exit): ")?;
        if raw_id.trim() == "-1" {
            return Err(DeskError::Aborted);
        }
        let id: GuestId = raw_id.parse()?;
        if self.grid.is_id_used(id) {
            return Err(GridError::DuplicateId(id).into());
        }

        let first_name = self.ask("Enter first name: ")?;
        let last_name = self.ask("Enter last name: ")?;
        let birth_date: HotelDate = self.ask("Enter birth date (ddmmyyyy): ")?.parse()?;
        let check_in: HotelDate = self.ask("Enter check-in date (ddmmyyyy): ")?.parse()?;
        let check_out: HotelDate = self.ask("Enter check-out date (ddmmyyyy): ")?.parse()?;
        if check_in >= check_out {
            return Err(GridError::DateOrderViolation { check_in, check_out }.into());
        }

        let occupants: usize = self
            .ask("Enter number of occupants: ")?
            .trim()
            .parse()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| GridError::InvalidInput("number of occupants must be at least 1".to_string()))?;

        let mut booking = Booking::new(Guest::new(id, first_name, last_name, birth_date), check_in, check_out);
        for n in 2..=occupants {
            writeln!(self.output, "Enter details for occupant {}:", n)?;
            let occupant_id: GuestId = self.ask("  Enter ID: ")?.parse()?;
            if booking.guest_ids().any(|known| known == occupant_id) {
                return Err(GridError::DuplicateId(occupant_id).into());
            }
            let first_name = self.ask("  Enter first name: ")?;
            let last_name = self.ask("  Enter last name: ")?;
            let birth_date: HotelDate = self.ask("  Enter birth date (ddmmyyyy): ")?.parse()?;
            booking = booking.with_occupant(Guest::new(occupant_id, first_name, last_name, birth_date));
        }

        let location = self.choose_free_room()?;
        self.grid.assign_room(booking, location)?;
        writeln!(self.output, "Guest checked in to {}.", location)?;
        Ok(())
    }

    /// Keep asking until the operator names a room that exists and is free.
    fn choose_free_room(&mut self) -> DeskResult<RoomLocation> {
        loop {
            let location = match self.ask_location() {
                Ok(location) => location,
                Err(DeskError::Grid(e)) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.grid.get(location).is_none() {
                return Ok(location);
            }
            writeln!(self.output, "Room already occupied, please choose another.")?;
        }
    }

    fn ask_location(&mut self) -> DeskResult<RoomLocation> {
        let floor = self.ask_number("Enter floor (1-10): ")?;
        let room = self.ask_number("Enter room number (1-6): ")?;
        Ok(RoomLocation::new(floor, room).map_err(GridError::from)?)
    }

    fn find_guest(&mut self) -> DeskResult<()> {
        let last_name = self.ask("Enter last name to search: ")?;
        match self.grid.find_by_last_name(last_name.trim()) {
            Some((location, booking)) => {
                writeln!(self.output, "Guest found in {}:", location)?;
                writeln!(self.output, "{}", render::guest_info(booking))?;
            }
            None => writeln!(self.output, "Guest not found.")?,
        }
        Ok(())
    }

    fn next_departures(&mut self) -> DeskResult<()> {
        let today: HotelDate = self.ask("Enter current date (ddmmyyyy): ")?.parse()?;
        let departures = self.grid.next_departures(today);
        if departures.is_empty() {
            writeln!(self.output, "No guests in the hotel.")?;
            return Ok(());
        }

        writeln!(self.output, "Rooms with upcoming departures:")?;
        for departure in departures {
            writeln!(
                self.output,
                "Room of: {} ({}, {} days)",
                departure.booking.last_name(),
                departure.location,
                departure.days_left
            )?;
        }
        Ok(())
    }

    fn check_out(&mut self) -> DeskResult<()> {
        let location = self.ask_location()?;
        let booking = self.grid.vacate_room(location)?;
        writeln!(
            self.output,
            "Checked out {} ({} occupants) from {}.",
            booking.last_name(),
            booking.occupants(),
            location
        )?;
        Ok(())
    }

    fn ask_number(&mut self, prompt: &str) -> DeskResult<u32> {
        let raw = self.ask(prompt)?;
        raw.trim()
            .parse()
            .map_err(|_| GridError::InvalidInput(format!("expected a number, got {:?}", raw.trim())).into())
    }

    /// Prompt and read one line without its line ending. End of input
    /// surfaces as `UnexpectedEof`.
    fn ask(&mut self, prompt: &str) -> DeskResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
