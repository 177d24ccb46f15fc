//! HTTP API request and response types

use adboard::{AdvertisementPayload, SellerId, Statistics};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

pub fn print_advertisement(advertisement: &adboard::Advertisement) {
    print!(
        "{} [seller {}] {} - {} (likes: {}, views: {}, contacts: {})",
        advertisement.id,
        advertisement.seller_id,
        advertisement.name,
        advertisement.price,
        advertisement.statistics.likes,
        advertisement.statistics.view_count,
        advertisement.statistics.contacts
    );

    if let Some(ref created_at) = advertisement.created_at {
        print!(" (created: {created_at})");
    }

    println!();
}

// =============================================================================
// ROUTES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    pub fn segment(self) -> &'static str {
        match self {
            ApiVersion::V1 => "1",
            ApiVersion::V2 => "2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.segment())
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(format!("unsupported API version {other}, expected 1 or 2")),
        }
    }
}

pub mod paths {
    use super::ApiVersion;

    pub const CREATE_ITEM: &str = "/api/1/item";
    pub const HEALTH: &str = "/health";

    pub fn item(id: &str) -> String {
        format!("/api/1/item/{}", urlencoding::encode(id))
    }

    pub fn seller_items(seller_id: &str) -> String {
        format!("/api/1/{}/item", urlencoding::encode(seller_id))
    }

    pub fn statistics(version: ApiVersion, id: &str) -> String {
        format!(
            "/api/{}/statistic/{}",
            version.segment(),
            urlencoding::encode(id)
        )
    }

    pub fn delete_item(id: &str) -> String {
        format!("/api/2/item/{}", urlencoding::encode(id))
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorResult {
    pub message: String,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

/// Error body returned by the service: `{"result": {...}, "status": "400"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub result: ErrorResult,
    pub status: String,
}

impl ErrorResponse {
    pub fn new(status: &str, message: &str) -> Self {
        Self {
            result: ErrorResult {
                message: message.to_string(),
                messages: HashMap::new(),
            },
            status: status.to_string(),
        }
    }
    pub fn bad_request(message: &str) -> Self {
        Self::new("400", message)
    }
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut response = Self::bad_request(message);
        response
            .result
            .messages
            .insert(field.to_string(), message.to_string());
        response
    }
    pub fn not_found(message: &str) -> Self {
        Self::new("404", message)
    }
    pub fn item_not_found(id: &str) -> Self {
        Self::not_found(&format!("item {id} not found"))
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub timestamp: u64,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validates a raw creation body the way the service does.
///
/// Zero price counts as missing. Statistics are optional and default to zero
/// counters, but any counter present must be a non-negative integer.
pub fn validate_create_request(body: &Value) -> Result<AdvertisementPayload, ErrorResponse> {
    let object = body
        .as_object()
        .ok_or_else(|| ErrorResponse::bad_request("request body must be a JSON object"))?;

    let seller_id = match present(object, "sellerID") {
        None => return Err(required("sellerID")),
        Some(value) => {
            let raw = value
                .as_i64()
                .ok_or_else(|| ErrorResponse::invalid_field("sellerID", "sellerID must be an integer"))?;
            SellerId::new(raw).map_err(|e| ErrorResponse::invalid_field("sellerID", &e.to_string()))?
        }
    };

    let name = match present(object, "name") {
        None => return Err(required("name")),
        Some(value) => {
            let name = value
                .as_str()
                .ok_or_else(|| ErrorResponse::invalid_field("name", "name must be a string"))?;
            if name.trim().is_empty() {
                return Err(required("name"));
            }
            name.to_string()
        }
    };

    let price = match present(object, "price") {
        None => return Err(required("price")),
        Some(value) => match value.as_i64() {
            Some(0) => return Err(required("price")),
            Some(price) if price < 0 => {
                return Err(ErrorResponse::invalid_field(
                    "price",
                    "price must be a positive integer",
                ));
            }
            Some(price) => price as u64,
            None => {
                return Err(ErrorResponse::invalid_field(
                    "price",
                    "price must be a positive integer",
                ));
            }
        },
    };

    let statistics = match present(object, "statistics") {
        None => Statistics::default(),
        Some(Value::Object(counters)) => Statistics {
            likes: counter(counters, "likes")?,
            view_count: counter(counters, "viewCount")?,
            contacts: counter(counters, "contacts")?,
        },
        Some(_) => {
            return Err(ErrorResponse::invalid_field(
                "statistics",
                "statistics must be an object",
            ));
        }
    };

    Ok(AdvertisementPayload {
        seller_id,
        name,
        price,
        statistics,
    })
}

/// Seller path segment of the listing route. Only the integer shape is
/// checked; an out-of-range seller simply owns nothing.
pub fn parse_seller_path(raw: &str) -> Result<i64, ErrorResponse> {
    raw.parse::<i64>()
        .map_err(|_| ErrorResponse::invalid_field("sellerID", "sellerID must be an integer"))
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn required(field: &str) -> ErrorResponse {
    ErrorResponse::invalid_field(field, &format!("field {field} is required"))
}

fn counter(counters: &Map<String, Value>, field: &str) -> Result<u64, ErrorResponse> {
    match present(counters, field) {
        None => Ok(0),
        Some(value) => value.as_u64().ok_or_else(|| {
            ErrorResponse::invalid_field(
                &format!("statistics.{field}"),
                &format!("{field} must be a non-negative integer"),
            )
        }),
    }
}
