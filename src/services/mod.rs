pub mod ledger;
pub mod seed;

pub use ledger::{BookingConfirmation, BookingLedger, LedgerError, PendingBooking};
