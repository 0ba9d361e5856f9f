use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use luxor_core::{GuestRepository, OccupancyGrid};
use luxor_shared::{Booking, Guest, GuestId, HotelDate, RoomLocation};
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

pub const HEADERS: [&str; 9] = [
    "Floor",
    "Room",
    "ID",
    "First Name",
    "Last Name",
    "Birth Date",
    "Check-in Date",
    "Check-out Date",
    "Occupants",
];

/// One line of the guest file. Additional occupants repeat their room's
/// floor and room but leave the stay columns blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterRow {
    #[serde(rename = "Floor")]
    floor: u32,
    #[serde(rename = "Room")]
    room: u32,
    #[serde(rename = "ID")]
    id: GuestId,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Birth Date")]
    birth_date: HotelDate,
    #[serde(rename = "Check-in Date")]
    check_in: Option<HotelDate>,
    #[serde(rename = "Check-out Date")]
    check_out: Option<HotelDate>,
    #[serde(rename = "Occupants")]
    occupants: Option<usize>,
}

impl RosterRow {
    fn primary(location: RoomLocation, booking: &Booking) -> Self {
        let mut row = Self::occupant(location, &booking.primary);
        row.check_in = Some(booking.check_in);
        row.check_out = Some(booking.check_out);
        row.occupants = Some(booking.occupants());
        row
    }

    fn occupant(location: RoomLocation, guest: &Guest) -> Self {
        Self {
            floor: location.floor() as u32,
            room: location.room() as u32,
            id: guest.id,
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            birth_date: guest.birth_date,
            check_in: None,
            check_out: None,
            occupants: None,
        }
    }

    fn guest(&self) -> Guest {
        Guest::new(self.id, self.first_name.clone(), self.last_name.clone(), self.birth_date)
    }
}

/// Guest roster kept in a CSV file that opens in any spreadsheet.
#[derive(Debug, Clone)]
pub struct CsvGuestStore {
    path: PathBuf,
}

impl CsvGuestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn access_error(&self, source: csv::Error) -> StoreError {
        StoreError::FileAccess {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn write_rows(&self, rows: &[RosterRow]) -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.access_error(e))?;

        writer.write_record(HEADERS).map_err(|e| self.access_error(e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| self.access_error(e))?;
        }

        writer
            .flush()
            .map_err(|e| self.access_error(csv::Error::from(e)))?;
        Ok(())
    }

    fn read_rows(&self) -> StoreResult<Vec<(usize, RosterRow)>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.access_error(e))?;

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<RosterRow>().enumerate() {
            // Line 1 is the header
            let row_number = index + 2;
            match result {
                Ok(row) => rows.push((row_number, row)),
                Err(e) if e.is_io_error() => return Err(self.access_error(e)),
                Err(e) => {
                    return Err(StoreError::Malformed {
                        row: row_number,
                        reason: e.to_string(),
                    })
                }
            }
        }
        Ok(rows)
    }
}

impl GuestRepository for CsvGuestStore {
    type Error = StoreError;

    fn save(&self, grid: &OccupancyGrid) -> StoreResult<()> {
        let mut bookings: Vec<(RoomLocation, &Booking)> = grid.bookings().collect();
        // Stable, so equal last names keep scan order
        bookings.sort_by(|a, b| a.1.last_name().cmp(b.1.last_name()));

        let mut rows = Vec::new();
        for (location, booking) in &bookings {
            rows.push(RosterRow::primary(*location, booking));
            rows.extend(
                booking
                    .additional_occupants
                    .iter()
                    .map(|occupant| RosterRow::occupant(*location, occupant)),
            );
        }

        self.write_rows(&rows)?;
        tracing::info!(
            path = %self.path.display(),
            bookings = bookings.len(),
            rows = rows.len(),
            "Guest file written"
        );
        Ok(())
    }

    fn load(&self) -> StoreResult<OccupancyGrid> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No guest file yet, starting empty");
            return Ok(OccupancyGrid::new());
        }

        let rows = self.read_rows()?;

        // First row seen for a room is its primary guest
        let mut rooms: BTreeMap<RoomLocation, (usize, &RosterRow, Vec<Guest>)> = BTreeMap::new();
        for (row_number, row) in &rows {
            let location = RoomLocation::new(row.floor, row.room).map_err(|e| StoreError::Malformed {
                row: *row_number,
                reason: e.to_string(),
            })?;
            rooms.entry(location).or_insert((*row_number, row, Vec::new()));
        }

        // Anyone else listed in that room shares the booking
        for (row_number, row) in &rows {
            let location = RoomLocation::new(row.floor, row.room).map_err(|e| StoreError::Malformed {
                row: *row_number,
                reason: e.to_string(),
            })?;
            if let Some((_, primary, occupants)) = rooms.get_mut(&location) {
                if primary.id != row.id {
                    occupants.push(row.guest());
                }
            }
        }

        let mut grid = OccupancyGrid::new();
        for (location, (row_number, primary, occupants)) in rooms {
            let (Some(check_in), Some(check_out)) = (primary.check_in, primary.check_out) else {
                return Err(StoreError::Malformed {
                    row: row_number,
                    reason: format!("first guest listed for {} has no stay dates", location),
                });
            };

            let mut booking = Booking::new(primary.guest(), check_in, check_out);
            booking.additional_occupants = occupants;

            if let Some(expected) = primary.occupants {
                if expected != booking.occupants() {
                    return Err(StoreError::Malformed {
                        row: row_number,
                        reason: format!(
                            "{} lists {} occupants but {} are on file",
                            location,
                            expected,
                            booking.occupants()
                        ),
                    });
                }
            }

            grid.assign_room(booking, location)?;
        }

        tracing::info!(
            path = %self.path.display(),
            bookings = grid.occupied_count(),
            "Guest file loaded"
        );
        Ok(grid)
    }

    fn clear(&self) -> StoreResult<()> {
        self.write_rows(&[])?;
        tracing::info!(path = %self.path.display(), "Guest file cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxor_core::GridError;
    use std::fs;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("luxor-store-{}-{}.csv", std::process::id(), name));
        let _ = fs::remove_file(&path);
        path
    }

    fn guest(id: u32, first_name: &str, last_name: &str) -> Guest {
        Guest::new(GuestId::new(id).unwrap(), first_name, last_name, "07031988".parse().unwrap())
    }

    fn sample_grid() -> OccupancyGrid {
        let mut grid = OccupancyGrid::new();
        grid.assign_room_at(
            Booking::new(guest(12345678, "Jane", "Doe"), "01012025".parse().unwrap(), "05012025".parse().unwrap()),
            3,
            2,
        )
        .unwrap();
        grid.assign_room_at(
            Booking::new(guest(87654321, "Ana", "Alvarez"), "02012025".parse().unwrap(), "09012025".parse().unwrap())
                .with_occupant(guest(11112222, "Luis", "Alvarez"))
                .with_occupant(guest(33334444, "Marta", "Alvarez")),
            10,
            6,
        )
        .unwrap();
        grid
    }

    #[test]
    fn test_save_then_load_reproduces_grid() {
        let path = scratch_file("round-trip");
        let store = CsvGuestStore::new(&path);
        let grid = sample_grid();

        store.save(&grid).unwrap();
        let loaded = store.load().unwrap();

        let original: Vec<(RoomLocation, &Booking)> = grid.bookings().collect();
        let restored: Vec<(RoomLocation, &Booking)> = loaded.bookings().collect();
        assert_eq!(original, restored);
        assert!(loaded.is_id_used(GuestId::new(87654321).unwrap()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_padded_names_survive_round_trip() {
        let path = scratch_file("padded");
        let store = CsvGuestStore::new(&path);
        let mut grid = OccupancyGrid::new();
        grid.assign_room_at(
            Booking::new(guest(12345678, " Jane", "Doe "), "01012025".parse().unwrap(), "05012025".parse().unwrap())
                .with_occupant(guest(22223333, "  Max ", " Doe")),
            4,
            4,
        )
        .unwrap();

        store.save(&grid).unwrap();
        let loaded = store.load().unwrap();

        let original: Vec<(RoomLocation, &Booking)> = grid.bookings().collect();
        let restored: Vec<(RoomLocation, &Booking)> = loaded.bookings().collect();
        assert_eq!(original, restored);
        assert_eq!(restored[0].1.primary.first_name, "Jane");
        assert!(loaded.find_by_last_name("Doe").is_some());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_layout() {
        let path = scratch_file("layout");
        let store = CsvGuestStore::new(&path);
        store.save(&sample_grid()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Floor,Room,ID,First Name,Last Name,Birth Date,Check-in Date,Check-out Date,Occupants"
        );
        // Sorted by last name: Alvarez before Doe, occupants right after their primary
        assert_eq!(lines[1], "10,6,87654321,Ana,Alvarez,07031988,02012025,09012025,3");
        assert_eq!(lines[2], "10,6,11112222,Luis,Alvarez,07031988,,,");
        assert_eq!(lines[3], "10,6,33334444,Marta,Alvarez,07031988,,,");
        assert_eq!(lines[4], "3,2,12345678,Jane,Doe,07031988,01012025,05012025,1");
        assert_eq!(lines.len(), 5);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = CsvGuestStore::new(scratch_file("missing"));
        let grid = store.load().unwrap();
        assert_eq!(grid.empty_room_count(), 60);
    }

    #[test]
    fn test_clear_keeps_only_header() {
        let path = scratch_file("clear");
        let store = CsvGuestStore::new(&path);
        store.save(&sample_grid()).unwrap();
        store.clear().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(store.load().unwrap().occupied_count(), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_accepts_dates_without_leading_zero() {
        let path = scratch_file("short-dates");
        fs::write(
            &path,
            "Floor,Room,ID,First Name,Last Name,Birth Date,Check-in Date,Check-out Date,Occupants\n\
             3,2,12345678,Jane,Doe,7031988,1012025,5012025,1\n",
        )
        .unwrap();

        let grid = CsvGuestStore::new(&path).load().unwrap();
        let booking = grid.get(RoomLocation::new(3, 2).unwrap()).unwrap();
        assert_eq!(booking.check_out.to_string(), "05012025");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_bad_rows() {
        let header = "Floor,Room,ID,First Name,Last Name,Birth Date,Check-in Date,Check-out Date,Occupants\n";
        let cases = [
            ("bad-id", "3,2,123,Jane,Doe,07031988,01012025,05012025,1\n"),
            ("bad-floor", "11,2,12345678,Jane,Doe,07031988,01012025,05012025,1\n"),
            ("no-dates", "3,2,12345678,Jane,Doe,07031988,,,\n"),
            ("count", "3,2,12345678,Jane,Doe,07031988,01012025,05012025,2\n"),
        ];

        for (name, body) in cases {
            let path = scratch_file(name);
            fs::write(&path, format!("{}{}", header, body)).unwrap();
            let result = CsvGuestStore::new(&path).load();
            assert!(
                matches!(result, Err(StoreError::Malformed { row: 2, .. })),
                "{}: {:?}",
                name,
                result.err()
            );
            fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn test_load_enforces_unique_ids() {
        let path = scratch_file("dup");
        fs::write(
            &path,
            "Floor,Room,ID,First Name,Last Name,Birth Date,Check-in Date,Check-out Date,Occupants\n\
             1,1,12345678,Jane,Doe,07031988,01012025,05012025,1\n\
             1,2,12345678,Jane,Doe,07031988,01012025,05012025,1\n",
        )
        .unwrap();

        let result = CsvGuestStore::new(&path).load();
        assert!(matches!(result, Err(StoreError::Grid(GridError::DuplicateId(_)))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_path_is_file_access_error() {
        let store = CsvGuestStore::new(std::env::temp_dir().join("luxor-no-such-dir").join("guests.csv"));
        let result = store.save(&OccupancyGrid::new());
        assert!(matches!(result, Err(StoreError::FileAccess { .. })));
    }
}
