pub mod seed;

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Booking;

/// In-memory booking records plus the order their ids were first added in.
///
/// Readers share the lock and writers hold it exclusively, so no reader sees
/// a record without its order entry or the other way round. Every read hands
/// back clones; the store stays the only owner of booking state.
#[derive(Debug, Default)]
pub struct BookingStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, Booking>,
    order: Vec<String>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Nothing panics while holding the write guard, so a poisoned lock still
    // holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a booking whose id the caller has already made unique.
    pub fn add(&self, booking: Booking) {
        let mut inner = self.write();
        inner.order.push(booking.id.clone());
        inner.records.insert(booking.id.clone(), booking);
    }

    /// Replaces the record stored under `booking.id`. Returns false when no
    /// such record exists; position in the listing is unchanged.
    pub fn update(&self, booking: Booking) -> bool {
        let mut inner = self.write();
        match inner.records.get_mut(&booking.id) {
            Some(existing) => {
                *existing = booking;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        self.read().records.get(id).cloned()
    }

    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.write();
        if inner.records.remove(id).is_none() {
            return false;
        }
        if let Some(pos) = inner.order.iter().position(|existing| existing == id) {
            inner.order.remove(pos);
        }
        true
    }

    /// Window `[offset, offset + limit)` over insertion order, clipped to the
    /// number of live records.
    pub fn list(&self, offset: usize, limit: usize) -> Vec<Booking> {
        let inner = self.read();
        if offset >= inner.order.len() {
            return Vec::new();
        }
        let end = offset.saturating_add(limit).min(inner.order.len());
        inner.order[offset..end]
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
