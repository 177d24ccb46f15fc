use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub mod error;
pub mod fixtures;
pub mod telemetry;

pub use error::AdboardError;

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// SELLER IDENTIFIERS
// =============================================================================

pub const SELLER_ID_MIN: i64 = 111_111;
pub const SELLER_ID_MAX: i64 = 999_999;
pub const SELLER_ID_RANGE: RangeInclusive<i64> = SELLER_ID_MIN..=SELLER_ID_MAX;

/// Seller key accepted by the advertisement service.
///
/// Values built through [`SellerId::new`] or [`SellerId::random`] always lie in
/// [`SELLER_ID_RANGE`]. Deserialization is transparent so that ids echoed by the
/// service are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(i64);

impl SellerId {
    pub fn new(value: i64) -> Result<Self, AdboardError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(AdboardError::InvalidSellerId { seller_id: value })
        }
    }

    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(SELLER_ID_RANGE))
    }

    pub fn is_valid(value: i64) -> bool {
        SELLER_ID_RANGE.contains(&value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// An adjacent seller id that stays inside the valid range.
    pub fn neighbour(self) -> Self {
        if self.0 >= SELLER_ID_MAX {
            Self(self.0 - 1)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ADVERTISEMENTS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: u64,
    pub view_count: u64,
    pub contacts: u64,
}

impl Statistics {
    pub fn new(likes: u64, view_count: u64, contacts: u64) -> Self {
        Self {
            likes,
            view_count,
            contacts,
        }
    }
}

/// Body of a creation request. The service expects `sellerID` on the way in
/// and answers with `sellerId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementPayload {
    #[serde(rename = "sellerID")]
    pub seller_id: SellerId,
    pub name: String,
    pub price: u64,
    pub statistics: Statistics,
}

impl AdvertisementPayload {
    pub fn new(seller_id: SellerId, name: &str, price: u64, statistics: Statistics) -> Self {
        Self {
            seller_id,
            name: name.to_string(),
            price,
            statistics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: String,
    pub seller_id: SellerId,
    pub name: String,
    pub price: u64,
    pub statistics: Statistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Advertisement {
    pub fn from_payload(id: String, payload: AdvertisementPayload, created_at: String) -> Self {
        Self {
            id,
            seller_id: payload.seller_id,
            name: payload.name,
            price: payload.price,
            statistics: payload.statistics,
            created_at: Some(created_at),
        }
    }

    /// True when every field the client supplied was echoed back unchanged.
    pub fn echoes(&self, payload: &AdvertisementPayload) -> bool {
        self.seller_id == payload.seller_id
            && self.name == payload.name
            && self.price == payload.price
            && self.statistics == payload.statistics
    }
}
