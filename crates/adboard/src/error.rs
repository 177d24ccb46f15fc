use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AdboardError {
    /// The request never produced a response.
    Transport {
        context: String,
        reason: String,
    },
    UnexpectedStatus {
        context: String,
        expected: u16,
        actual: u16,
        body: String,
    },
    Decode {
        context: String,
        reason: String,
    },
    InvalidConfig {
        field: String,
        reason: String,
    },
    InvalidSellerId {
        seller_id: i64,
    },
}

impl fmt::Display for AdboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdboardError::Transport { context, reason } => {
                write!(f, "Request failed in {context}: {reason}")
            }
            AdboardError::UnexpectedStatus {
                context,
                expected,
                actual,
                body,
            } => {
                write!(
                    f,
                    "Unexpected status in {context}: expected {expected}, got {actual}"
                )?;
                if !body.is_empty() {
                    write!(f, " (body: {})", body.trim())?;
                }
                Ok(())
            }
            AdboardError::Decode { context, reason } => {
                write!(f, "Failed to decode response in {context}: {reason}")
            }
            AdboardError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for '{field}': {reason}")
            }
            AdboardError::InvalidSellerId { seller_id } => {
                write!(
                    f,
                    "Seller id {seller_id} is outside the range {}..={}",
                    crate::SELLER_ID_MIN,
                    crate::SELLER_ID_MAX
                )
            }
        }
    }
}

impl std::error::Error for AdboardError {}

impl AdboardError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdboardError::UnexpectedStatus { actual: 404, .. })
    }

    pub fn is_client_error(&self) -> bool {
        match self {
            AdboardError::UnexpectedStatus { actual, .. } => (400..500).contains(actual),
            AdboardError::InvalidSellerId { .. } => true,
            _ => false,
        }
    }

    pub fn transport(context: &str, reason: impl fmt::Display) -> Self {
        AdboardError::Transport {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(context: &str, reason: impl fmt::Display) -> Self {
        AdboardError::Decode {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(field: &str, reason: impl fmt::Display) -> Self {
        AdboardError::InvalidConfig {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
