use async_trait::async_trait;

use super::{BookingStore, StoreError};
use crate::database::Database;
use crate::models::{Booking, BookingRow, Movie, NewBooking, NewMovie};

#[derive(Clone)]
pub struct SqlStore {
    db: Database,
}

impl SqlStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connects, applies migrations and returns a ready store.
    pub async fn connect(database_url: &str, pool_size: u32) -> Result<Self, StoreError> {
        let db = Database::new(database_url, pool_size).await?;
        db.run_migrations().await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl BookingStore for SqlStore {
    async fn insert_movie(&self, movie: NewMovie) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO movies (title, description, poster, price)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(movie.title)
        .bind(movie.description)
        .bind(movie.poster)
        .bind(movie.price)
        .fetch_one(&self.db.pool)
        .await?;
        Ok(id)
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, poster, price FROM movies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;
        Ok(movie)
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, poster, price FROM movies ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await?;
        Ok(movies)
    }

    async fn count_movies(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.db.pool)
            .await?;
        Ok(count)
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO bookings (movie_id, seats, paid)
             VALUES (?, ?, ?)
             RETURNING id",
        )
        .bind(booking.movie_id)
        .bind(booking.stored_seats())
        .bind(booking.paid)
        .fetch_one(&self.db.pool)
        .await?;
        Ok(id)
    }

    async fn bookings_for_movie(&self, movie_id: i64) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, movie_id, seats, paid FROM bookings WHERE movie_id = ? ORDER BY id",
        )
        .bind(movie_id)
        .fetch_all(&self.db.pool)
        .await?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete_all_bookings(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookings")
            .execute(&self.db.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single connection keeps the in-memory database alive for the whole test.
    async fn memory_store() -> SqlStore {
        SqlStore::connect("sqlite::memory:", 1).await.unwrap()
    }

    fn seats(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn movies_round_trip_with_default_price() {
        let store = memory_store().await;
        assert_eq!(store.count_movies().await.unwrap(), 0);

        let id = store
            .insert_movie(NewMovie::new("dark-knight").poster("images/dark-knight.jpg"))
            .await
            .unwrap();

        let movie = store.find_movie(id).await.unwrap().unwrap();
        assert_eq!(movie.title, "dark-knight");
        assert_eq!(movie.price, 150);
        assert_eq!(movie.poster.as_deref(), Some("images/dark-knight.jpg"));
        assert_eq!(store.count_movies().await.unwrap(), 1);
        assert!(store.find_movie(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bookings_filter_by_movie_in_insert_order() {
        let store = memory_store().await;
        let first = store.insert_booking(NewBooking::pending(1, &seats(&["A1", "A2"]))).await.unwrap();
        store.insert_booking(NewBooking::pending(2, &seats(&["Z9"]))).await.unwrap();
        let second = store.insert_booking(NewBooking::paid(1, &seats(&["B3"]))).await.unwrap();

        let bookings = store.bookings_for_movie(1).await.unwrap();
        assert_eq!(bookings.iter().map(|b| b.id).collect::<Vec<_>>(), vec![first, second]);
        assert_eq!(bookings[0].seats, seats(&["A1", "A2"]));
        assert!(!bookings[0].paid);
        assert!(bookings[1].paid);
    }

    #[tokio::test]
    async fn stored_empty_labels_are_dropped_on_read() {
        let store = memory_store().await;
        store.insert_booking(NewBooking::pending(4, &seats(&["A1", "", "A2"]))).await.unwrap();

        let raw: String = sqlx::query_scalar("SELECT seats FROM bookings WHERE movie_id = 4")
            .fetch_one(&store.db.pool)
            .await
            .unwrap();
        assert_eq!(raw, "A1,,A2");

        let bookings = store.bookings_for_movie(4).await.unwrap();
        assert_eq!(bookings[0].seats, seats(&["A1", "A2"]));
    }

    #[tokio::test]
    async fn bookings_may_reference_missing_movies() {
        let store = memory_store().await;
        assert!(store.insert_booking(NewBooking::paid(999, &seats(&["C1"]))).await.is_ok());
    }

    #[tokio::test]
    async fn delete_all_reports_removed_rows() {
        let store = memory_store().await;
        store.insert_booking(NewBooking::pending(1, &seats(&["A1"]))).await.unwrap();
        store.insert_booking(NewBooking::pending(2, &seats(&["A1"]))).await.unwrap();

        assert_eq!(store.delete_all_bookings().await.unwrap(), 2);
        assert!(store.bookings_for_movie(1).await.unwrap().is_empty());
        assert_eq!(store.delete_all_bookings().await.unwrap(), 0);
    }
}
