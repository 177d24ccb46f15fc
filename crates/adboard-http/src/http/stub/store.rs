//! In-memory advertisement store backing the contract stub

use adboard::{Advertisement, AdvertisementPayload, SellerId, Statistics};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

struct StoredAdvertisement {
    sequence: u64,
    advertisement: Advertisement,
}

#[derive(Default)]
pub struct ItemStore {
    items: DashMap<String, StoredAdvertisement>,
    next_sequence: AtomicU64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, payload: AdvertisementPayload) -> Advertisement {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();
        let advertisement = Advertisement::from_payload(id.clone(), payload, created_at);
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        self.items.insert(
            id,
            StoredAdvertisement {
                sequence,
                advertisement: advertisement.clone(),
            },
        );
        advertisement
    }

    pub fn get(&self, id: &str) -> Option<Advertisement> {
        self.items.get(id).map(|entry| entry.advertisement.clone())
    }

    /// Advertisements of `seller_id` in creation order.
    pub fn list_by_seller(&self, seller_id: i64) -> Vec<Advertisement> {
        let mut matching: Vec<(u64, Advertisement)> = self
            .items
            .iter()
            .filter(|entry| entry.advertisement.seller_id.value() == seller_id)
            .map(|entry| (entry.sequence, entry.advertisement.clone()))
            .collect();
        matching.sort_by_key(|(sequence, _)| *sequence);
        matching.into_iter().map(|(_, ad)| ad).collect()
    }

    pub fn statistics(&self, id: &str) -> Option<Statistics> {
        self.items.get(id).map(|entry| entry.advertisement.statistics)
    }

    /// Returns false when the id is unknown or already deleted.
    pub fn delete(&self, id: &str) -> bool {
        self.items.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
