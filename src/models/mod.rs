pub mod booking;

pub use booking::{Booking, BookingInput, BookingPatch, BookingStatus};
