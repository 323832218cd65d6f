//! Domain error model.

use thiserror::Error;

/// Result type used across the pricing domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic input/config failure. The engine aborts the
/// computation on the first one it hits; nothing is substituted with a default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A configuration selected a variant the catalog group does not offer.
    #[error("unknown variant '{variant}' in group '{group}'")]
    UnknownVariant { group: String, variant: String },

    /// A configuration referenced a variant group the catalog does not define.
    #[error("unknown variant group '{group}'")]
    UnknownGroup { group: String },

    /// A negative volume reached the engine.
    #[error("invalid volume {volume} for kit '{kit}': volume must be non-negative")]
    InvalidVolume { kit: String, volume: i64 },

    /// A discount rate outside `[0, 1)`.
    #[error("invalid discount rate: {0}")]
    InvalidDiscount(String),

    /// Volume-weighted totals left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// A value failed validation (e.g. malformed catalog data).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn unknown_variant(group: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::UnknownVariant {
            group: group.into(),
            variant: variant.into(),
        }
    }

    pub fn unknown_group(group: impl Into<String>) -> Self {
        Self::UnknownGroup {
            group: group.into(),
        }
    }

    pub fn invalid_volume(kit: impl Into<String>, volume: i64) -> Self {
        Self::InvalidVolume {
            kit: kit.into(),
            volume,
        }
    }

    pub fn invalid_discount(msg: impl Into<String>) -> Self {
        Self::InvalidDiscount(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
