//! Input fixtures shared by the contract tests.

use crate::{AdvertisementPayload, SellerId, Statistics};
use log::debug;
use std::sync::OnceLock;

pub const DEFAULT_NAME: &str = "Тестовый товар";
pub const DEFAULT_PRICE: u64 = 1000;
pub const DEFAULT_STATISTICS: Statistics = Statistics {
    likes: 10,
    view_count: 20,
    contacts: 5,
};

static SESSION_SELLER_ID: OnceLock<SellerId> = OnceLock::new();

/// One random seller per process, shared by every test that needs a seller.
pub fn session_seller_id() -> SellerId {
    *SESSION_SELLER_ID.get_or_init(|| {
        let seller_id = SellerId::random();
        debug!("Session seller id: {seller_id}");
        seller_id
    })
}

/// A seller no test creates advertisements for.
pub fn unused_seller_id() -> SellerId {
    session_seller_id().neighbour()
}

/// A valid creation payload for `seller_id` with the default name, price and counters.
pub fn advertisement_data(seller_id: SellerId) -> AdvertisementPayload {
    AdvertisementPayload::new(seller_id, DEFAULT_NAME, DEFAULT_PRICE, DEFAULT_STATISTICS)
}
