use luxor_core::OccupancyGrid;
use luxor_shared::{Booking, FLOOR_COUNT, ROOMS_PER_FLOOR};

const FLOOR_WIDTH: usize = 8;
const ROOM_WIDTH: usize = 6;

fn rule(fill: char) -> String {
    let mut line = format!("+{}", fill.to_string().repeat(FLOOR_WIDTH + 2));
    for _ in 0..ROOMS_PER_FLOOR {
        line.push('+');
        line.push_str(&fill.to_string().repeat(ROOM_WIDTH + 2));
    }
    line.push('+');
    line
}

/// The hotel as a table, top floor first, each room showing its head count
/// (0 when empty).
pub fn hotel_table(grid: &OccupancyGrid) -> String {
    let mut lines = vec![rule('-')];

    let mut header = format!("| {:<FLOOR_WIDTH$} |", "");
    for room in 1..=ROOMS_PER_FLOOR {
        header.push_str(&format!(" {:>ROOM_WIDTH$} |", format!("Room {}", room)));
    }
    lines.push(header);
    lines.push(rule('='));

    for (index, floor) in grid.floors().iter().enumerate().rev() {
        let mut row = format!("| {:<FLOOR_WIDTH$} |", format!("Floor {}", index + 1));
        for cell in floor {
            let occupants = cell.booking().map(Booking::occupants).unwrap_or(0);
            row.push_str(&format!(" {:>ROOM_WIDTH$} |", occupants));
        }
        lines.push(row);
        lines.push(rule('-'));
    }

    debug_assert_eq!(lines.len(), 3 + 2 * FLOOR_COUNT);
    lines.join("\n")
}

/// Everything the desk knows about a booking.
pub fn guest_info(booking: &Booking) -> String {
    let guest = &booking.primary;
    let mut text = format!(
        "Guest Information:\n  ID: {}\n  First Name: {}\n  Last Name: {}\n  Birth Date: {}\n  \
         Check-in Date: {}\n  Check-out Date: {}\n  Number of Occupants: {}",
        guest.id,
        guest.first_name,
        guest.last_name,
        guest.birth_date,
        booking.check_in,
        booking.check_out,
        booking.occupants()
    );

    if !booking.additional_occupants.is_empty() {
        text.push_str("\n  Additional Occupants:");
        for (i, occupant) in booking.additional_occupants.iter().enumerate() {
            text.push_str(&format!(
                "\n    Occupant {}:\n      ID: {}\n      First Name: {}\n      Last Name: {}\n      Birth Date: {}",
                i + 1,
                occupant.id,
                occupant.first_name,
                occupant.last_name,
                occupant.birth_date
            ));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxor_shared::{Guest, GuestId};

    fn guest(id: u32, first_name: &str, last_name: &str) -> Guest {
        Guest::new(GuestId::new(id).unwrap(), first_name, last_name, "24121990".parse().unwrap())
    }

    #[test]
    fn test_hotel_table_puts_top_floor_first() {
        let mut grid = OccupancyGrid::new();
        grid.assign_room_at(
            Booking::new(guest(12345678, "Jane", "Doe"), "01012025".parse().unwrap(), "05012025".parse().unwrap())
                .with_occupant(guest(22222222, "John", "Doe")),
            1,
            6,
        )
        .unwrap();

        let table = hotel_table(&grid);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 23);
        assert!(lines[1].contains("Room 1") && lines[1].contains("Room 6"));
        assert!(lines[3].starts_with("| Floor 10 |"));
        assert_eq!(lines[21], "| Floor 1  |      0 |      0 |      0 |      0 |      0 |      2 |");
        // Every row is the same width
        assert!(lines.iter().all(|line| line.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_guest_info_lists_additional_occupants() {
        let booking = Booking::new(
            guest(12345678, "Jane", "Doe"),
            "01012025".parse().unwrap(),
            "05012025".parse().unwrap(),
        )
        .with_occupant(guest(22222222, "John", "Doe"));

        let info = guest_info(&booking);
        assert!(info.contains("  ID: 12345678"));
        assert!(info.contains("Check-out Date: 05012025"));
        assert!(info.contains("Number of Occupants: 2"));
        assert!(info.contains("    Occupant 1:\n      ID: 22222222"));
    }

    #[test]
    fn test_guest_info_without_occupants() {
        let booking = Booking::new(
            guest(12345678, "Jane", "Doe"),
            "01012025".parse().unwrap(),
            "05012025".parse().unwrap(),
        );
        assert!(!guest_info(&booking).contains("Additional Occupants"));
    }
}
