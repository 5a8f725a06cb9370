pub mod bookings;
pub mod ids;
pub mod pagination;

pub use bookings::BookingService;
pub use ids::{IdGenerator, UuidV4Generator};
pub use pagination::Pagination;
