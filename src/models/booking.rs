use sqlx::FromRow;

/// Separator between seat labels in the stored `seats` column.
pub const SEAT_DELIMITER: &str = ",";

/// Joins seat labels into their stored form. Empty labels are kept as-is and
/// dropped again by [`split_seats`].
pub fn join_seats(seats: &[String]) -> String {
    seats.join(SEAT_DELIMITER)
}

pub fn split_seats(raw: &str) -> Vec<String> {
    raw.split(SEAT_DELIMITER)
        .filter(|seat| !seat.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub movie_id: i64,
    pub seats: Vec<String>,
    pub paid: bool,
}

// Row as persisted, seats still joined
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookingRow {
    pub id: i64,
    pub movie_id: i64,
    pub seats: String,
    pub paid: bool,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            movie_id: row.movie_id,
            seats: split_seats(&row.seats),
            paid: row.paid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub movie_id: i64,
    pub seats: Vec<String>,
    pub paid: bool,
}

impl NewBooking {
    pub fn pending(movie_id: i64, seats: &[String]) -> Self {
        Self { movie_id, seats: seats.to_vec(), paid: false }
    }

    pub fn paid(movie_id: i64, seats: &[String]) -> Self {
        Self { movie_id, seats: seats.to_vec(), paid: true }
    }

    pub fn stored_seats(&self) -> String {
        join_seats(&self.seats)
    }
}
