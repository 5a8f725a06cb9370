use crate::services::BookingService;

pub struct AppState {
    pub bookings: BookingService,
}
