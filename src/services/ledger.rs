//! Seat occupancy and booking acceptance.
//!
//! Every accepted request inserts a fresh booking row. Confirming a pending order
//! does not update the pending row: it adds a second, paid row for the same seats,
//! so those seats show up twice in [`BookingLedger::list_occupied_seats`].
//!
//! Only [`BookingLedger::create_pending_booking`] checks that the movie exists.
//! [`BookingLedger::confirm_booking`] accepts any movie id. Neither path checks
//! for seats already taken by another booking.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Movie, NewBooking};
use crate::store::{BookingStore, StoreError};

/// Status token telling the client to show the QR payment step.
pub const QR_READY: &str = "qr_ready";

pub const CONFIRMED_MESSAGE: &str = "Booking confirmed via QR";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("No seats selected")]
    NoSeatsSelected,

    #[error("Invalid movie")]
    InvalidMovie(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBooking {
    pub booking_id: i64,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub booking_id: i64,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct BookingLedger {
    store: Arc<dyn BookingStore>,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, LedgerError> {
        Ok(self.store.list_movies().await?)
    }

    pub async fn find_movie(&self, movie_id: i64) -> Result<Option<Movie>, LedgerError> {
        Ok(self.store.find_movie(movie_id).await?)
    }

    /// Seats held by any booking for `movie_id`, in booking order. Unknown movie
    /// ids simply have no seats.
    pub async fn list_occupied_seats(&self, movie_id: i64) -> Result<Vec<String>, LedgerError> {
        let bookings = self.store.bookings_for_movie(movie_id).await?;
        Ok(bookings
            .into_iter()
            .flat_map(|b| b.seats)
            .filter(|seat| !seat.is_empty())
            .collect())
    }

    pub async fn create_pending_booking(
        &self,
        movie_id: i64,
        seats: &[String],
    ) -> Result<PendingBooking, LedgerError> {
        if seats.is_empty() {
            debug!(movie_id, "Rejected order without seats");
            return Err(LedgerError::NoSeatsSelected);
        }

        if self.store.find_movie(movie_id).await?.is_none() {
            debug!(movie_id, "Rejected order for unknown movie");
            return Err(LedgerError::InvalidMovie(movie_id));
        }

        let booking_id = self
            .store
            .insert_booking(NewBooking::pending(movie_id, seats))
            .await?;
        info!(booking_id, movie_id, seats = seats.len(), "Created pending booking");

        Ok(PendingBooking { booking_id, status: QR_READY })
    }

    pub async fn confirm_booking(
        &self,
        movie_id: i64,
        seats: &[String],
    ) -> Result<BookingConfirmation, LedgerError> {
        if seats.is_empty() {
            debug!(movie_id, "Rejected confirmation without seats");
            return Err(LedgerError::NoSeatsSelected);
        }

        let booking_id = self
            .store
            .insert_booking(NewBooking::paid(movie_id, seats))
            .await?;
        info!(booking_id, movie_id, seats = seats.len(), "Confirmed paid booking");

        Ok(BookingConfirmation { booking_id, message: CONFIRMED_MESSAGE })
    }

    /// Deletes every booking for every movie. Returns the number of rows removed.
    pub async fn clear_all_bookings(&self) -> Result<u64, LedgerError> {
        let removed = self.store.delete_all_bookings().await?;
        warn!(removed, "All bookings cleared");
        Ok(removed)
    }
}
