use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{BookingStore, StoreError};
use crate::models::{Booking, BookingRow, Movie, NewBooking, NewMovie};

#[derive(Default)]
struct Tables {
    movies: Vec<Movie>,
    bookings: Vec<BookingRow>,
    last_movie_id: i64,
    last_booking_id: i64,
}

/// In-process store. Ids start at 1 and are never reused, like SQLite's
/// `AUTOINCREMENT`; bookings keep their seats in the joined column form.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn push_booking(&self, movie_id: i64, seats: String, paid: bool) -> i64 {
        let mut tables = self.tables.lock().await;
        tables.last_booking_id += 1;
        let id = tables.last_booking_id;
        tables.bookings.push(BookingRow { id, movie_id, seats, paid });
        id
    }

    // Seats column stored exactly as given
    #[cfg(test)]
    pub(crate) async fn insert_raw_booking(&self, movie_id: i64, seats: &str, paid: bool) -> i64 {
        self.push_booking(movie_id, seats.to_owned(), paid).await
    }

    #[cfg(test)]
    pub(crate) async fn booking_count(&self) -> usize {
        self.tables.lock().await.bookings.len()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert_movie(&self, movie: NewMovie) -> Result<i64, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.last_movie_id += 1;
        let id = tables.last_movie_id;
        tables.movies.push(movie.with_id(id));
        Ok(id)
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.tables.lock().await.movies.clone())
    }

    async fn count_movies(&self) -> Result<i64, StoreError> {
        Ok(self.tables.lock().await.movies.len() as i64)
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<i64, StoreError> {
        Ok(self
            .push_booking(booking.movie_id, booking.stored_seats(), booking.paid)
            .await)
    }

    async fn bookings_for_movie(&self, movie_id: i64) -> Result<Vec<Booking>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .bookings
            .iter()
            .filter(|row| row.movie_id == movie_id)
            .cloned()
            .map(Booking::from)
            .collect())
    }

    async fn delete_all_bookings(&self) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().await;
        let removed = tables.bookings.len() as u64;
        tables.bookings.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_not_reused_after_reset() {
        let store = MemoryStore::new();
        let first = store.insert_raw_booking(1, "A1", false).await;
        store.delete_all_bookings().await.unwrap();
        let second = store.insert_raw_booking(1, "A1", false).await;
        assert!(second > first);
    }

    #[tokio::test]
    async fn movies_are_listed_in_insert_order() {
        let store = MemoryStore::new();
        store.insert_movie(NewMovie::new("loki").price(200)).await.unwrap();
        store.insert_movie(NewMovie::new("Alvin")).await.unwrap();

        let titles: Vec<String> = store
            .list_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["loki", "Alvin"]);
        assert_eq!(store.count_movies().await.unwrap(), 2);
    }
}
