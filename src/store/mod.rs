//! Persistence for movies and bookings.
//!
//! [`BookingStore`] is the seam the ledger and the HTTP layer talk to. [`SqlStore`]
//! backs it with SQLite through `sqlx`; [`MemoryStore`] keeps everything in process
//! and is what the tests run against.

pub mod memory;
pub mod sql;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Booking, Movie, NewBooking, NewMovie};

pub use memory::MemoryStore;
pub use sql::SqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert_movie(&self, movie: NewMovie) -> Result<i64, StoreError>;

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError>;

    /// All movies in id order.
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    async fn count_movies(&self) -> Result<i64, StoreError>;

    /// Persists a booking and returns its id. The row is visible to every
    /// read issued after this returns.
    async fn insert_booking(&self, booking: NewBooking) -> Result<i64, StoreError>;

    /// Bookings for one movie in id order.
    async fn bookings_for_movie(&self, movie_id: i64) -> Result<Vec<Booking>, StoreError>;

    /// Removes every booking and returns how many rows went away.
    async fn delete_all_bookings(&self) -> Result<u64, StoreError>;
}
