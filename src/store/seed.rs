use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::services::ids::IdGenerator;
use crate::store::BookingStore;

/// Loads the two sample bookings a fresh process starts with.
pub fn seed_sample_bookings(store: &BookingStore, ids: &dyn IdGenerator) -> Result<(), AppError> {
    let samples = [
        ("2025-12-20", "2025-12-25", 2, 450.00, BookingStatus::Confirmed),
        ("2025-11-10", "2025-11-12", 1, 199.99, BookingStatus::Pending),
    ];

    for (check_in, check_out, guests, price, status) in samples {
        store.add(Booking {
            id: ids.generate()?,
            check_in_date: check_in.to_string(),
            check_out_date: check_out.to_string(),
            guests,
            price,
            status: status.to_string(),
        });
    }

    tracing::info!(count = samples.len(), "seeded sample bookings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ids::UuidV4Generator;

    #[test]
    fn test_seed_order_and_values() {
        let store = BookingStore::new();
        seed_sample_bookings(&store, &UuidV4Generator).unwrap();

        let all = store.list(0, 10);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].check_in_date, "2025-12-20");
        assert_eq!(all[0].status, "confirmed");
        assert_eq!(all[1].guests, 1);
        assert_eq!(all[1].price, 199.99);
        assert_eq!(all[1].status, "pending");
        assert_ne!(all[0].id, all[1].id);
    }
}
