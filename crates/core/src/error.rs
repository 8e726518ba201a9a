//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Storage concerns belong to the infra crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value fell outside its declared length, range or cardinality.
    #[error("{field}: {reason}")]
    FieldBounds { field: String, reason: String },

    /// The SKU does not follow the `<prefix>-<3 digits>` pattern.
    #[error("invalid sku '{sku}': {reason}")]
    SkuFormat { sku: String, reason: String },

    /// The seller email belongs to a domain outside the allow-list.
    #[error("email domain '{domain}' is not allowed")]
    EmailDomain { domain: String },

    /// A cross-field business rule was violated.
    #[error("business rule violated: {0}")]
    BusinessRule(String),

    /// Another record in the catalog already uses this SKU.
    #[error("SKU already exists: {0}")]
    DuplicateSku(String),

    /// No record matches the requested identifier.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A patch tried to change a field fixed at creation time.
    #[error("{0} is immutable and cannot be changed")]
    ImmutableField(&'static str),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn bounds(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FieldBounds {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn sku_format(sku: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SkuFormat {
            sku: sku.into(),
            reason: reason.into(),
        }
    }

    pub fn email_domain(domain: impl Into<String>) -> Self {
        Self::EmailDomain {
            domain: domain.into(),
        }
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn duplicate_sku(sku: impl Into<String>) -> Self {
        Self::DuplicateSku(sku.into())
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Stable machine-readable code, used by the HTTP layer in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::FieldBounds { .. } => "field_bounds",
            DomainError::SkuFormat { .. } => "sku_format",
            DomainError::EmailDomain { .. } => "email_domain",
            DomainError::BusinessRule(_) => "business_rule",
            DomainError::DuplicateSku(_) => "duplicate_sku",
            DomainError::NotFound(_) => "not_found",
            DomainError::ImmutableField(_) => "immutable_field",
            DomainError::InvalidId(_) => "invalid_id",
        }
    }
}
