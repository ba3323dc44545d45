pub mod booking;
pub mod movie;

pub use booking::{Booking, BookingRow, NewBooking};
pub use movie::{Movie, NewMovie};
