use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Booking, BookingInput, BookingPatch, BookingStatus};
use crate::services::ids::{IdGenerator, UuidV4Generator};
use crate::services::pagination::Pagination;
use crate::store::{seed, BookingStore};

/// Validation and state transitions on top of [`BookingStore`].
///
/// Replace, patch and cancel read the record, change a copy and write it
/// back. Two writers racing on the same id end up last-writer-wins; there is
/// no version token to detect it.
pub struct BookingService {
    store: Arc<BookingStore>,
    ids: Box<dyn IdGenerator>,
}

impl BookingService {
    pub fn new(store: Arc<BookingStore>) -> Self {
        Self::with_id_generator(store, Box::new(UuidV4Generator))
    }

    pub fn with_id_generator(store: Arc<BookingStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub fn seed(&self) -> Result<(), AppError> {
        seed::seed_sample_bookings(&self.store, self.ids.as_ref())
    }

    pub fn create(&self, input: BookingInput) -> Result<Booking, AppError> {
        validate_input(&input)?;

        let booking = Booking {
            id: self.ids.generate()?,
            check_in_date: input.check_in_date,
            check_out_date: input.check_out_date,
            guests: input.guests,
            price: input.price,
            status: BookingStatus::Confirmed.to_string(),
        };
        self.store.add(booking.clone());

        tracing::info!(booking_id = %booking.id, "booking created");
        Ok(booking)
    }

    pub fn get(&self, id: &str) -> Result<Booking, AppError> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Overwrites every client-owned field. Status is kept as is.
    pub fn replace(&self, id: &str, input: BookingInput) -> Result<Booking, AppError> {
        let existing = self.get(id)?;
        validate_input(&input)?;

        let updated = Booking {
            id: existing.id,
            check_in_date: input.check_in_date,
            check_out_date: input.check_out_date,
            guests: input.guests,
            price: input.price,
            status: existing.status,
        };
        self.write_back(updated.clone())?;

        tracing::info!(booking_id = %id, "booking replaced");
        Ok(updated)
    }

    /// Applies only the supplied fields. Any status string is accepted.
    pub fn patch(&self, id: &str, patch: BookingPatch) -> Result<Booking, AppError> {
        let mut current = self.get(id)?;

        if patch.is_empty() {
            return Err(validation("no fields provided for update"));
        }
        if patch.guests.is_some_and(|guests| guests < 1) {
            return Err(validation("guests must be at least 1"));
        }
        if patch.price.is_some_and(|price| price < 0.0) {
            return Err(validation("price must be non-negative"));
        }

        if let Some(check_in) = patch.check_in_date {
            current.check_in_date = check_in;
        }
        if let Some(check_out) = patch.check_out_date {
            current.check_out_date = check_out;
        }
        if let Some(guests) = patch.guests {
            current.guests = guests;
        }
        if let Some(price) = patch.price {
            current.price = price;
        }
        if let Some(status) = patch.status {
            current.status = status;
        }
        self.write_back(current.clone())?;

        tracing::info!(booking_id = %id, status = %current.status, "booking patched");
        Ok(current)
    }

    /// Idempotent: cancelling a cancelled booking succeeds.
    pub fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        let mut booking = self.get(id)?;
        booking.status = BookingStatus::Cancelled.to_string();
        self.write_back(booking.clone())?;

        tracing::info!(booking_id = %id, "booking cancelled");
        Ok(booking)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.store.delete(id) {
            return Err(AppError::NotFound(id.to_string()));
        }
        tracing::info!(booking_id = %id, "booking deleted");
        Ok(())
    }

    pub fn list(&self, page: Pagination) -> Vec<Booking> {
        self.store.list(page.offset, page.limit)
    }

    // A delete can land between our read and this write.
    fn write_back(&self, booking: Booking) -> Result<(), AppError> {
        let id = booking.id.clone();
        if self.store.update(booking) {
            Ok(())
        } else {
            Err(AppError::NotFound(id))
        }
    }
}

fn validation(message: &str) -> AppError {
    tracing::warn!(reason = message, "rejected booking input");
    AppError::Validation(message.to_string())
}

fn validate_input(input: &BookingInput) -> Result<(), AppError> {
    if input.check_in_date.is_empty() || input.check_out_date.is_empty() {
        return Err(validation("checkInDate and checkOutDate are required"));
    }
    if input.guests < 1 {
        return Err(validation("guests must be at least 1"));
    }
    if input.price < 0.0 {
        return Err(validation("price must be non-negative"));
    }
    Ok(())
}
